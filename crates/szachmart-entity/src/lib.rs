//! # szachmart-entity
//!
//! Domain entity models for the Szachmart storefront client. Every struct in
//! this crate mirrors a JSON payload exchanged with the shop backend. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; field
//! names are camelCase on the wire.

pub mod category;
pub mod comment;
pub mod order;
pub mod product;
pub mod slider;
pub mod user;
