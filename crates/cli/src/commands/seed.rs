//! Seed the product catalog.

use tracing::info;

use clay_market_core::FileStore;
use clay_market_core::storage::ProductRepository;
use clay_market_storefront::StorefrontConfig;

/// Make sure the data directory holds a catalog.
///
/// An existing non-empty catalog is left alone unless `force` is set, in
/// which case it is replaced by the defaults.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the catalog cannot be
/// written.
pub fn catalog(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let store = FileStore::open(&config.data_dir)?;
    let products = ProductRepository::new(&store);

    let catalog = if force {
        info!("Resetting catalog to defaults");
        products.reset_to_default()?
    } else {
        products.load_or_seed()?
    };

    info!(
        products = catalog.len(),
        dir = %store.dir().display(),
        "Catalog ready"
    );
    Ok(())
}
