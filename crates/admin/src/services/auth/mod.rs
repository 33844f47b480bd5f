//! Admin access gate.
//!
//! A two-state machine (`LoggedOut` / `LoggedIn`) whose state lives in a
//! session-scoped store under [`keys::ADMIN_SESSION`]. Opening a gate over a
//! session that already carries the flag starts out logged in.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::instrument;

use clay_market_core::KeyValueStore;
use clay_market_core::storage::keys;

/// Value stored under the session key while logged in.
const LOGGED_IN: &str = "true";

/// The configured admin username and password.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    #[must_use]
    pub const fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check a login attempt.
    ///
    /// Both fields are always compared, in constant time, so the result
    /// does not reveal which one was wrong.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let password_ok = self
            .password
            .expose_secret()
            .as_bytes()
            .ct_eq(password.as_bytes());
        (username_ok & password_ok).into()
    }
}

/// Login state of the admin gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    LoggedOut,
    LoggedIn,
}

/// Admin access gate.
pub struct AdminGate<'a> {
    session: &'a dyn KeyValueStore,
    credentials: &'a AdminCredentials,
}

impl<'a> AdminGate<'a> {
    /// Create a gate over a session store.
    #[must_use]
    pub const fn new(session: &'a dyn KeyValueStore, credentials: &'a AdminCredentials) -> Self {
        Self {
            session,
            credentials,
        }
    }

    /// Current state, read from the session flag.
    ///
    /// An unreadable session counts as logged out.
    #[must_use]
    pub fn state(&self) -> GateState {
        match self.session.get(keys::ADMIN_SESSION) {
            Ok(Some(flag)) if flag == LOGGED_IN => GateState::LoggedIn,
            Ok(_) => GateState::LoggedOut,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read admin session flag");
                GateState::LoggedOut
            }
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state() == GateState::LoggedIn
    }

    /// Attempt to log in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username or password is
    /// wrong; the gate stays logged out.
    /// Returns `AuthError::Storage` if the session flag cannot be written.
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if !self.credentials.verify(username, password) {
            tracing::warn!("Admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        self.session.set(keys::ADMIN_SESSION, LOGGED_IN)?;
        tracing::info!("Admin logged in");
        Ok(())
    }

    /// Log out, clearing the session flag.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the session flag cannot be removed.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.session.remove(keys::ADMIN_SESSION)?;
        tracing::info!("Admin logged out");
        Ok(())
    }

    /// Fail unless logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotLoggedIn` if the gate is logged out.
    pub fn require_login(&self) -> Result<(), AuthError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            Err(AuthError::NotLoggedIn)
        }
    }
}
