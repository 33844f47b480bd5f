//! Product catalog repository.

use super::{KeyValueStore, StorageError, keys, read_collection, write_collection};
use crate::catalog::{Product, default_catalog};

/// Repository for the persisted product catalog.
pub struct ProductRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Load the catalog as stored. Missing or malformed data reads as an
    /// empty catalog; individual records that fail to load, such as one with
    /// a non-positive price, are skipped.
    #[must_use]
    pub fn load(&self) -> Vec<Product> {
        read_collection(self.store, keys::PRODUCTS)
    }

    /// Load the catalog, seeding the default products when none are stored.
    ///
    /// An empty stored catalog counts as "none stored", so deleting every
    /// product brings the defaults back on the next load.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the seed cannot be written.
    pub fn load_or_seed(&self) -> Result<Vec<Product>, StorageError> {
        let products = self.load();
        if !products.is_empty() {
            return Ok(products);
        }
        self.reset_to_default()
    }

    /// Overwrite the catalog with the default products.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be written.
    pub fn reset_to_default(&self) -> Result<Vec<Product>, StorageError> {
        let products = default_catalog();
        self.save_all(&products)?;
        tracing::info!(count = products.len(), "Seeded default catalog");
        Ok(products)
    }

    /// Replace the stored catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be written.
    pub fn save_all(&self, products: &[Product]) -> Result<(), StorageError> {
        write_collection(self.store, keys::PRODUCTS, products)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::ProductId;

    #[test]
    fn test_first_load_seeds_and_persists_default_catalog() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);

        let products = repo.load_or_seed().unwrap();
        assert_eq!(products.len(), 6);
        assert_eq!(products, default_catalog());

        let stored: Vec<Product> =
            serde_json::from_str(&store.get(keys::PRODUCTS).unwrap().unwrap()).unwrap();
        assert_eq!(stored, products);
    }

    #[test]
    fn test_stored_catalog_is_returned_unchanged() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);

        let mut products = default_catalog();
        products.truncate(2);
        repo.save_all(&products).unwrap();

        assert_eq!(repo.load_or_seed().unwrap(), products);
    }

    #[test]
    fn test_empty_or_malformed_catalog_is_reseeded() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);

        store.set(keys::PRODUCTS, "[]").unwrap();
        assert_eq!(repo.load_or_seed().unwrap().len(), 6);

        store.set(keys::PRODUCTS, "definitely not json").unwrap();
        assert_eq!(repo.load_or_seed().unwrap().len(), 6);
    }

    #[test]
    fn test_records_with_non_positive_price_are_skipped() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);
        store
            .set(
                keys::PRODUCTS,
                r#"[
                    {"id": 1, "name": "Cracked vase", "price": -5, "category": "vases",
                     "image": "x.jpg", "description": "d"},
                    {"id": 2, "name": "Free bowl", "price": 0, "category": "bowls",
                     "image": "x.jpg", "description": "d"},
                    {"id": 3, "name": "Plate", "price": 1500, "category": "plates",
                     "image": "x.jpg", "description": "d"}
                ]"#,
            )
            .unwrap();

        let products = repo.load_or_seed().unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(3));
    }

    #[test]
    fn test_load_does_not_seed() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(&store);

        assert!(repo.load().is_empty());
        assert_eq!(store.get(keys::PRODUCTS).unwrap(), None);
    }
}
