//! Checkout service.
//!
//! Validates the order form, snapshots the cart into an [`Order`], and
//! appends it to the shared order log.

mod error;

pub use error::CheckoutError;

use chrono::Utc;
use tracing::instrument;

use clay_market_core::storage::OrderRepository;
use clay_market_core::{Cart, Customer, KeyValueStore, Order};

/// Checkout service.
///
/// Only persists. Clearing the cart and the form afterwards is the caller's
/// job, and must happen only after [`CheckoutService::place_order`] returns
/// `Ok`, so a failed write never loses the shopper's cart.
pub struct CheckoutService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            orders: OrderRepository::new(store),
        }
    }

    /// Validate and record an order for the current cart.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::IncompleteForm` if any customer field is blank.
    /// Returns `CheckoutError::EmptyCart` if the cart has no items.
    /// Returns `CheckoutError::Storage` if the order log cannot be written.
    #[instrument(skip_all, fields(items = cart.len()))]
    pub fn place_order(&self, cart: &Cart, customer: &Customer) -> Result<Order, CheckoutError> {
        if !customer.is_complete() {
            return Err(CheckoutError::IncompleteForm);
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order::from_cart(cart, customer.clone(), Utc::now());
        self.orders.append(&order)?;

        tracing::info!(total = %order.total, lines = order.items.len(), "Order placed");
        Ok(order)
    }
}
