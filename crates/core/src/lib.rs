//! Clay Market Core - Shared domain model.
//!
//! This crate provides the types and persistence contract used by every
//! Clay Market component:
//! - `storefront` - Shopper session (catalog, cart, checkout)
//! - `admin` - Password-gated order viewer and product manager
//! - `cli` - Command-line tools over a local data directory
//!
//! # Architecture
//!
//! The two surfaces never talk to each other. They share only the keys of a
//! [`storage::KeyValueStore`], reading and writing whole JSON collections.
//! Everything outside [`storage`] is pure data and logic.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, categories, and customers
//! - [`catalog`] - Products, category filtering, and the default seed
//! - [`cart`] - Immutable shopping cart
//! - [`order`] - Order snapshots
//! - [`storage`] - Key-value stores and the product/order repositories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod storage;
pub mod types;

pub use cart::{Cart, CartItem};
pub use catalog::{CategoryFilter, Product, default_catalog};
pub use order::{Order, OrderLine};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use types::*;
