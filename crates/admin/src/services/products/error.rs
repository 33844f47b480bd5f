//! Product administration error types.

use thiserror::Error;

use clay_market_core::{PriceError, StorageError};

/// Errors that can occur when creating or deleting products.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Name, price, image, or description is blank.
    #[error("product form is incomplete")]
    IncompleteForm,

    /// Price is not a positive number.
    #[error("invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// The catalog could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
