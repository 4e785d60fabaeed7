//! # szachmart-auth
//!
//! Client-side authentication and authorization for the Szachmart
//! storefront.
//!
//! ## Modules
//!
//! - `token` — access token claims and unverified payload decoding
//! - `store` — the single durable token slot
//! - `session` — derivation of the current session from the token slot
//! - `guard` — role-based route authorization decisions

pub mod guard;
pub mod session;
pub mod store;
pub mod token;

pub use guard::{Access, RouteSpec, authorize};
pub use session::{Session, derive_session};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::{Claims, decode};
