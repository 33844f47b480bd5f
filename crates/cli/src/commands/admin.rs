//! Admin commands.
//!
//! # Usage
//!
//! ```bash
//! clay-cli admin -u potter -p '<password>' orders
//! clay-cli admin -u potter -p '<password>' products
//! clay-cli admin -u potter -p '<password>' delete-product --id 4
//! ```
//!
//! # Environment Variables
//!
//! - `CLAY_ADMIN_USERNAME` - Configured admin login name
//! - `CLAY_ADMIN_PASSWORD` - Configured admin password
//! - `CLAY_DATA_DIR` - Data directory (default: `./data`)
//!
//! Each invocation logs in against a fresh in-memory session, so nothing
//! stays logged in between runs.

use tracing::info;

use clay_market_admin::{AdminConfig, AdminPanel, AppError, ProductDraft};
use clay_market_core::{FileStore, MemoryStore, ProductId};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// List submitted orders, oldest first.
///
/// # Errors
///
/// Returns an error if configuration is invalid or login fails.
pub fn orders(username: &str, password: &str) -> CommandResult {
    with_panel(username, password, |panel| {
        let orders = panel.orders()?;
        info!(count = orders.len(), "Orders");
        for (index, order) in orders.iter().enumerate() {
            info!(
                "  Order #{} - {} - {} / {} / {}",
                index + 1,
                order.date.format("%Y-%m-%d %H:%M"),
                order.customer.name,
                order.customer.phone,
                order.customer.address
            );
            for line in &order.items {
                info!("    {} x{} - {}", line.name, line.quantity, line.price);
            }
            info!("    Total: {}", order.total);
        }
        Ok(())
    })
}

/// List the catalog.
///
/// # Errors
///
/// Returns an error if configuration is invalid or login fails.
pub fn products(username: &str, password: &str) -> CommandResult {
    with_panel(username, password, |panel| {
        let products = panel.products()?;
        info!(count = products.len(), "Products");
        for product in products {
            info!(
                "  #{} {} - {} [{}]",
                product.id,
                product.name,
                product.price,
                product.category.label()
            );
        }
        Ok(())
    })
}

/// Create a product.
///
/// # Errors
///
/// Returns an error if login fails, the draft is invalid, or the catalog
/// cannot be written.
pub fn add_product(username: &str, password: &str, draft: &ProductDraft) -> CommandResult {
    with_panel(username, password, |panel| {
        let product = panel.create_product(draft).inspect_err(log_reason)?;
        info!(product_id = %product.id, "Created {}", product.name);
        Ok(())
    })
}

/// Delete a product. Unknown ids are ignored.
///
/// # Errors
///
/// Returns an error if login fails or the catalog cannot be written.
pub fn delete_product(username: &str, password: &str, id: ProductId) -> CommandResult {
    with_panel(username, password, |panel| {
        panel.delete_product(id)?;
        let remaining = panel.products()?.len();
        info!(product_id = %id, remaining, "Delete done");
        Ok(())
    })
}

/// Open the panel over the configured data directory, log in, and run `f`.
fn with_panel<F>(username: &str, password: &str, f: F) -> CommandResult
where
    F: FnOnce(&mut AdminPanel<'_>) -> CommandResult,
{
    let config = AdminConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    let session = MemoryStore::new();

    let mut panel = AdminPanel::open(&store, &session, &config.credentials)?;
    panel.login(username, password).inspect_err(log_reason)?;

    let result = f(&mut panel);
    panel.logout()?;
    result
}

fn log_reason(err: &AppError) {
    tracing::warn!(reason = err.user_message(), "Admin command rejected");
}
