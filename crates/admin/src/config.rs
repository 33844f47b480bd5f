//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CLAY_ADMIN_USERNAME` - Admin login name
//! - `CLAY_ADMIN_PASSWORD` - Admin password (min 8 chars, not a placeholder)
//!
//! ## Optional
//! - `CLAY_DATA_DIR` - Directory holding the local store (default: `./data`)

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::services::auth::AdminCredentials;

const DEFAULT_DATA_DIR: &str = "./data";
const MIN_PASSWORD_LENGTH: usize = 8;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "todo",
    "admin123",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Admin configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Directory backing the local store
    pub data_dir: PathBuf,
    /// Configured login pair
    pub credentials: AdminCredentials,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the password fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the password fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("CLAY_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CLAY_DATA_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let username = get_required(&lookup, "CLAY_ADMIN_USERNAME")?;
        let password = SecretString::from(get_required(&lookup, "CLAY_ADMIN_PASSWORD")?);
        validate_password(&password, "CLAY_ADMIN_PASSWORD")?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            credentials: AdminCredentials::new(username, password),
        })
    }
}

/// Read a variable that must be present and non-blank.
fn get_required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
}

fn validate_password(password: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = password.expose_secret();

    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        ));
    }

    let lower = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_loads_credentials() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("CLAY_ADMIN_USERNAME", "potter"),
            ("CLAY_ADMIN_PASSWORD", "kiln-fired-9"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.credentials.username(), "potter");
        assert!(config.credentials.verify("potter", "kiln-fired-9"));
    }

    #[test]
    fn test_missing_username() {
        let result = AdminConfig::from_lookup(lookup(&[("CLAY_ADMIN_PASSWORD", "kiln-fired-9")]));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref key)) if key == "CLAY_ADMIN_USERNAME")
        );
    }

    #[test]
    fn test_blank_password_is_missing() {
        let result = AdminConfig::from_lookup(lookup(&[
            ("CLAY_ADMIN_USERNAME", "potter"),
            ("CLAY_ADMIN_PASSWORD", "   "),
        ]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    fn test_short_password_rejected() {
        let result = AdminConfig::from_lookup(lookup(&[
            ("CLAY_ADMIN_USERNAME", "potter"),
            ("CLAY_ADMIN_PASSWORD", "kiln9"),
        ]));
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_placeholder_password_rejected() {
        let result = AdminConfig::from_lookup(lookup(&[
            ("CLAY_ADMIN_USERNAME", "potter"),
            ("CLAY_ADMIN_PASSWORD", "ChangeMe-please"),
        ]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("changeme"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AdminConfig::from_lookup(lookup(&[
            ("CLAY_ADMIN_USERNAME", "potter"),
            ("CLAY_ADMIN_PASSWORD", "kiln-fired-9"),
        ]))
        .unwrap();
        assert!(!format!("{config:?}").contains("kiln-fired-9"));
    }
}
