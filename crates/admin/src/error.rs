//! Unified error handling for admin.

use thiserror::Error;

use clay_market_core::StorageError;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::products::ProductError;

/// Application-level error type for the admin surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login failed or the gate is closed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Product form rejected or catalog write failed.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// Store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Message safe to show the admin.
    ///
    /// Storage and config details stay in the logs.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Auth(AuthError::InvalidCredentials) => "Invalid username or password",
            Self::Auth(AuthError::NotLoggedIn) => "Please log in first",
            Self::Product(ProductError::IncompleteForm) => "Please fill in all fields",
            Self::Product(ProductError::InvalidPrice(_)) => "Price must be a positive number",
            Self::Auth(AuthError::Storage(_))
            | Self::Product(ProductError::Storage(_))
            | Self::Storage(_)
            | Self::Config(_) => "Something went wrong, please try again",
        }
    }
}

/// Result type alias for admin operations.
pub type Result<T> = std::result::Result<T, AppError>;
