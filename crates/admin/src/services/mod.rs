//! Business logic services.

pub mod auth;
pub mod products;
