//! List the catalog.

use tracing::info;

use clay_market_core::FileStore;
use clay_market_storefront::{ShopSession, StorefrontConfig};

/// Print the products visible under `category`, then the per-category counts.
///
/// Unknown category tokens show the whole catalog.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the catalog cannot be
/// seeded.
pub fn list(category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    let mut session = ShopSession::open(&store)?;
    session.select_category(category);

    let visible = session.visible_products();
    info!(
        category = session.selected_category().token(),
        shown = visible.len(),
        "Catalog"
    );
    for product in visible {
        info!(
            "  #{} {} - {} [{}]",
            product.id,
            product.name,
            product.price,
            product.category.label()
        );
    }

    for (category, count) in session.category_counts() {
        info!("  {}: {count}", category.label());
    }
    Ok(())
}
