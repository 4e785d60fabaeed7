//! # szachmart-cart
//!
//! The shopping cart store: an owned, injectable collection of product
//! lines with exact minor-unit totals.

pub mod store;

pub use store::{CartLine, CartStore};
