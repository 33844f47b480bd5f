//! Clay Market Admin library.
//!
//! The admin half of Clay Market: an [`AdminPanel`] behind a login gate that
//! lists submitted orders and creates or deletes catalog products.
//!
//! # Security
//!
//! The gate compares against credentials from [`AdminConfig`] and records a
//! login by setting a flag in a session-scoped store. Anyone who can write
//! that store can set the flag, so the gate keeps honest users out of the
//! admin screens and nothing more. Put a real authentication boundary in
//! front of the data directory if it needs protecting.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod panel;
pub mod services;

pub use config::AdminConfig;
pub use error::AppError;
pub use panel::AdminPanel;
pub use services::auth::{AdminCredentials, AdminGate, AuthError, GateState};
pub use services::products::{ProductAdmin, ProductDraft, ProductError};
