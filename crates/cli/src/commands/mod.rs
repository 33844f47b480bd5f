pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod seed;
