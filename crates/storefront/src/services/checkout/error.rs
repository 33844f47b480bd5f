//! Checkout error types.

use thiserror::Error;

use clay_market_core::StorageError;

/// Errors that can occur when placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Name, phone, or address is blank. Deliberately carries no field
    /// detail.
    #[error("order form is incomplete")]
    IncompleteForm,

    /// There is nothing in the cart to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The order could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
