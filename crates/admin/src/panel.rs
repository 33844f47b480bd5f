//! Admin panel.
//!
//! Ties the login gate to the data the admin works with: the order log
//! (read-only) and the product catalog (create and delete). Data is loaded
//! when the gate opens and dropped on logout.

use clay_market_core::storage::{OrderRepository, ProductRepository};
use clay_market_core::{KeyValueStore, Order, Product, ProductId};

use crate::error::Result;
use crate::services::auth::{AdminCredentials, AdminGate, GateState};
use crate::services::products::{ProductAdmin, ProductDraft};

/// Admin view over the shared store.
pub struct AdminPanel<'a> {
    store: &'a dyn KeyValueStore,
    gate: AdminGate<'a>,
    orders: Vec<Order>,
    products: Vec<Product>,
}

impl<'a> AdminPanel<'a> {
    /// Open the panel.
    ///
    /// `store` is the shared local store; `session` is the session-scoped
    /// store holding the login flag. If the session is already logged in,
    /// orders and products are loaded immediately.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the default catalog has to be seeded
    /// and cannot be written.
    pub fn open(
        store: &'a dyn KeyValueStore,
        session: &'a dyn KeyValueStore,
        credentials: &'a AdminCredentials,
    ) -> Result<Self> {
        let mut panel = Self {
            store,
            gate: AdminGate::new(session, credentials),
            orders: Vec::new(),
            products: Vec::new(),
        };
        if panel.gate.is_logged_in() {
            panel.reload()?;
        }
        Ok(panel)
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.gate.state()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.gate.is_logged_in()
    }

    /// Log in and load orders and products.
    ///
    /// If loading fails the session flag is cleared again, so an error always
    /// leaves the panel logged out.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `InvalidCredentials` on a mismatch.
    /// Returns `AppError::Storage` if the catalog seed cannot be written.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        self.gate.login(username, password)?;
        if let Err(e) = self.reload() {
            if let Err(logout_err) = self.gate.logout() {
                tracing::warn!(error = %logout_err, "Failed to clear admin session flag");
            }
            return Err(e);
        }
        Ok(())
    }

    /// Log out and forget the loaded data.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` if the session flag cannot be cleared.
    pub fn logout(&mut self) -> Result<()> {
        self.gate.logout()?;
        self.orders.clear();
        self.products.clear();
        Ok(())
    }

    /// Re-read orders and products from the store.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `NotLoggedIn` if logged out.
    /// Returns `AppError::Storage` if the catalog seed cannot be written.
    pub fn reload(&mut self) -> Result<()> {
        self.gate.require_login()?;
        self.orders = OrderRepository::new(self.store).list();
        self.products = ProductRepository::new(self.store).load_or_seed()?;
        tracing::debug!(
            orders = self.orders.len(),
            products = self.products.len(),
            "Admin data loaded"
        );
        Ok(())
    }

    /// Submitted orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `NotLoggedIn` if logged out.
    pub fn orders(&self) -> Result<&[Order]> {
        self.gate.require_login()?;
        Ok(&self.orders)
    }

    /// The catalog as loaded.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `NotLoggedIn` if logged out.
    pub fn products(&self) -> Result<&[Product]> {
        self.gate.require_login()?;
        Ok(&self.products)
    }

    /// Create a product from the admin form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `NotLoggedIn` if logged out.
    /// Returns `AppError::Product` if the draft is invalid or cannot be saved.
    pub fn create_product(&mut self, draft: &ProductDraft) -> Result<Product> {
        self.gate.require_login()?;
        Ok(ProductAdmin::new(self.store).create(&mut self.products, draft)?)
    }

    /// Delete a product. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Auth` with `NotLoggedIn` if logged out.
    /// Returns `AppError::Product` if the catalog cannot be saved.
    pub fn delete_product(&mut self, id: ProductId) -> Result<()> {
        self.gate.require_login()?;
        ProductAdmin::new(self.store).delete(&mut self.products, id)?;
        Ok(())
    }
}
