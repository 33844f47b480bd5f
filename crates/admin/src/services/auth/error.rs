//! Admin authentication error types.

use thiserror::Error;

use clay_market_core::StorageError;

/// Errors that can occur during admin authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password did not match. Which one is not reported.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An admin-only operation was attempted while logged out.
    #[error("not logged in")]
    NotLoggedIn,

    /// The session flag could not be written.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}
