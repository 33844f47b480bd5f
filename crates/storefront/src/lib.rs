//! Clay Market Storefront library.
//!
//! The shopper-facing half of Clay Market: a [`ShopSession`] loads the
//! catalog, filters it by category, accumulates a cart, and submits orders
//! through the [`CheckoutService`](services::checkout::CheckoutService).
//!
//! The cart lives only as long as the session. The catalog and the order
//! log are shared with the admin surface through the local store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod services;
pub mod session;

pub use config::StorefrontConfig;
pub use error::AppError;
pub use session::ShopSession;
