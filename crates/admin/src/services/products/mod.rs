//! Product administration.
//!
//! Create and delete operate on the caller's loaded copy of the catalog and
//! then write the whole collection back. The copy is only updated once the
//! write has succeeded.

mod error;

pub use error::ProductError;

use chrono::Utc;
use tracing::instrument;

use clay_market_core::catalog::next_product_id;
use clay_market_core::storage::ProductRepository;
use clay_market_core::{Category, KeyValueStore, Price, Product, ProductId};

/// Admin form input for a new product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    /// Raw price input, parsed on submit.
    pub price: String,
    pub category: Category,
    pub image: String,
    pub description: String,
}

impl ProductDraft {
    fn validate(&self) -> Result<Price, ProductError> {
        let fields = [&self.name, &self.price, &self.image, &self.description];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ProductError::IncompleteForm);
        }
        Ok(Price::parse(&self.price)?)
    }
}

/// Product administration service.
pub struct ProductAdmin<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductAdmin<'a> {
    /// Create a new product administration service.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            products: ProductRepository::new(store),
        }
    }

    /// Validate a draft, append it to the catalog, and persist.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::IncompleteForm` if a field is blank.
    /// Returns `ProductError::InvalidPrice` if the price is not a positive number.
    /// Returns `ProductError::Storage` if the catalog cannot be written.
    #[instrument(skip_all, fields(name = %draft.name))]
    pub fn create(
        &self,
        catalog: &mut Vec<Product>,
        draft: &ProductDraft,
    ) -> Result<Product, ProductError> {
        let price = draft.validate()?;

        let product = Product {
            id: next_product_id(catalog, Utc::now()),
            name: draft.name.trim().to_owned(),
            price,
            category: draft.category,
            image: draft.image.trim().to_owned(),
            description: draft.description.trim().to_owned(),
        };

        let mut updated = catalog.clone();
        updated.push(product.clone());
        self.products.save_all(&updated)?;
        *catalog = updated;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Remove a product from the catalog and persist.
    ///
    /// Returns `false` and writes nothing if no product has this id.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::Storage` if the catalog cannot be written.
    #[instrument(skip(self, catalog))]
    pub fn delete(&self, catalog: &mut Vec<Product>, id: ProductId) -> Result<bool, ProductError> {
        if !catalog.iter().any(|p| p.id == id) {
            return Ok(false);
        }

        let updated: Vec<Product> = catalog.iter().filter(|p| p.id != id).cloned().collect();
        self.products.save_all(&updated)?;
        *catalog = updated;

        tracing::info!(product_id = %id, "Product deleted");
        Ok(true)
    }
}
