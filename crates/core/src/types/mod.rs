//! Core types for Clay Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod customer;
pub mod id;
pub mod price;

pub use category::Category;
pub use customer::Customer;
pub use id::*;
pub use price::{Price, PriceError};
