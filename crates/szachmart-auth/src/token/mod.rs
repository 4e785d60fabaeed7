//! Access token claims and decoding.

pub mod claims;
pub mod decoder;

pub use claims::Claims;
pub use decoder::decode;
