//! Place an order from the command line.

use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use clay_market_core::{CartItem, Customer, FileStore, ProductId};
use clay_market_storefront::{AppError, ShopSession, StorefrontConfig};

/// Errors specific to the checkout command.
#[derive(Debug, Error)]
pub enum CheckoutCommandError {
    /// `--item` value is not `ID` or `ID:QTY`.
    #[error("Invalid item '{0}': expected ID or ID:QTY with QTY >= 1")]
    InvalidItem(String),

    /// No product with this id in the catalog.
    #[error("Unknown product id: {0}")]
    UnknownProduct(ProductId),
}

/// One `--item` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    pub id: ProductId,
    pub quantity: u32,
}

impl FromStr for ItemSpec {
    type Err = CheckoutCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CheckoutCommandError::InvalidItem(s.to_owned());
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => (id, quantity.trim().parse().map_err(|_| invalid())?),
            None => (s, 1),
        };
        if quantity == 0 {
            return Err(invalid());
        }
        let id = id.parse().map_err(|_| invalid())?;
        Ok(Self { id, quantity })
    }
}

/// Build a cart from `items` and submit it with the given contact details.
///
/// # Errors
///
/// Returns an error if an item names an unknown product, if a contact field
/// is blank, or if the order cannot be written.
pub fn place(
    items: &[ItemSpec],
    name: String,
    phone: String,
    address: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    let mut session = ShopSession::open(&store)?;

    for item in items {
        if !session.add_to_cart(item.id) {
            return Err(CheckoutCommandError::UnknownProduct(item.id).into());
        }
        if item.quantity > 1 {
            let current = session.cart().get(item.id).map_or(0, CartItem::quantity);
            let wanted = i64::from(current) + i64::from(item.quantity) - 1;
            session.update_quantity(item.id, wanted);
        }
    }

    *session.form_mut() = Customer {
        name,
        phone,
        address,
    };

    let order = session.submit_order().map_err(|e| {
        let err = AppError::from(e);
        tracing::warn!(reason = err.user_message(), "Order not placed");
        err
    })?;

    info!(
        lines = order.items.len(),
        total = %order.total,
        "Order placed for {}",
        order.customer.name
    );
    for line in &order.items {
        info!("  {} x{} - {}", line.name, line.quantity, line.price);
    }
    Ok(())
}
