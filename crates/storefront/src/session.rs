//! Shopper session.
//!
//! Holds what one shopper sees and edits: the catalog loaded at open time,
//! the selected category, the cart, and the order form. Only orders are
//! written back; the cart and form vanish with the session.

use rust_decimal::Decimal;

use clay_market_core::catalog::category_counts;
use clay_market_core::storage::ProductRepository;
use clay_market_core::{
    Cart, Category, CategoryFilter, Customer, KeyValueStore, Order, Product, ProductId,
};

use crate::error::Result;
use crate::services::checkout::{CheckoutError, CheckoutService};

/// One shopper's view of the store.
pub struct ShopSession<'a> {
    store: &'a dyn KeyValueStore,
    products: Vec<Product>,
    filter: CategoryFilter,
    cart: Cart,
    form: Customer,
}

impl<'a> ShopSession<'a> {
    /// Open a session, loading the catalog and seeding it on first run.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the default catalog cannot be written.
    pub fn open(store: &'a dyn KeyValueStore) -> Result<Self> {
        let products = ProductRepository::new(store).load_or_seed()?;
        tracing::debug!(products = products.len(), "Shop session opened");

        Ok(Self {
            store,
            products,
            filter: CategoryFilter::All,
            cart: Cart::new(),
            form: Customer::default(),
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Full catalog as loaded, in storage order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product in the loaded catalog.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Select a category by token. Unknown tokens select everything.
    pub fn select_category(&mut self, token: &str) {
        self.filter = CategoryFilter::from_token(token);
    }

    #[must_use]
    pub const fn selected_category(&self) -> CategoryFilter {
        self.filter
    }

    /// Products matching the selected category.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    /// Product count per category, for the navigation badges.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        category_counts(&self.products)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// Returns `false` without touching the cart if the id is not in the
    /// loaded catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.products.iter().find(|p| p.id == id) else {
            return false;
        };
        self.cart = self.cart.add(product);
        true
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart = self.cart.remove(id);
    }

    /// Set a cart quantity. Values below 1 are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.cart = self.cart.set_quantity(id, quantity);
    }

    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// The order form as currently filled in.
    #[must_use]
    pub const fn form(&self) -> &Customer {
        &self.form
    }

    /// Mutable access to the order form fields.
    pub const fn form_mut(&mut self) -> &mut Customer {
        &mut self.form
    }

    /// Submit the cart as an order.
    ///
    /// The order is persisted first; the cart and form are cleared only
    /// after the write succeeds. On any error both are left as they were so
    /// the shopper can correct and retry.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::IncompleteForm` if a form field is blank.
    /// Returns `CheckoutError::EmptyCart` if the cart is empty.
    /// Returns `CheckoutError::Storage` if the order cannot be written.
    pub fn submit_order(&mut self) -> std::result::Result<Order, CheckoutError> {
        let order = CheckoutService::new(self.store).place_order(&self.cart, &self.form)?;

        self.cart = Cart::new();
        self.form.clear();
        Ok(order)
    }
}
