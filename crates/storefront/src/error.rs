//! Unified error handling for the storefront.
//!
//! Provides an `AppError` type wrapping every storefront failure, plus the
//! generic message a shopper should see for each one.

use thiserror::Error;

use clay_market_core::StorageError;

use crate::config::ConfigError;
use crate::services::checkout::CheckoutError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Checkout was rejected or could not be recorded.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Local storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Message safe to show to a shopper.
    ///
    /// Validation failures collapse to one generic prompt; internal errors
    /// never expose their details.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Checkout(CheckoutError::IncompleteForm) => "Please fill in all fields",
            Self::Checkout(CheckoutError::EmptyCart) => "Your cart is empty",
            Self::Checkout(CheckoutError::Storage(_)) | Self::Storage(_) | Self::Config(_) => {
                "Something went wrong, please try again"
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
