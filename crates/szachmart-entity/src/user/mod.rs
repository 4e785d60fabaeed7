//! User domain entities.

pub mod model;
pub mod role;
pub mod shipping;

pub use model::{RoleAssignment, User};
pub use role::Role;
pub use shipping::ShippingDetails;
