//! # szachmart-core
//!
//! Core crate for the Szachmart storefront client. Contains configuration
//! schemas, the money type, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Szachmart crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
