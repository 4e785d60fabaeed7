//! Order domain entities.

pub mod item;
pub mod model;
pub mod status;

pub use item::{OrderItem, OrderItemRequest};
pub use model::{Order, OrderRequest};
pub use status::OrderStatus;
