//! Order entity model.

use serde::{Deserialize, Serialize};

use szachmart_core::types::Money;

use super::item::{OrderItem, OrderItemRequest};
use super::status::OrderStatus;

/// A placed order as returned by the order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier.
    pub id: i64,
    /// Ordered lines.
    pub order_items: Vec<OrderItem>,
    /// Total as computed by the backend.
    pub total_price: Money,
    /// Placement timestamp string.
    pub order_date: String,
    /// Estimated or actual delivery date string, once set.
    #[serde(default)]
    pub delivery_date: Option<String>,
    /// Fulfilment status.
    pub status: OrderStatus,
}

/// The request body for placing a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Lines to order.
    pub order_items: Vec<OrderItemRequest>,
}
