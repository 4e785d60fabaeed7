//! Order line items.

use serde::{Deserialize, Serialize};

use szachmart_core::types::Money;

/// A line of a placed order as returned by the order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Ordered product.
    pub product_id: i64,
    /// Ordered quantity.
    pub quantity: u32,
    /// Product name at the time of ordering.
    #[serde(default)]
    pub product_name: String,
    /// Unit price at the time of ordering.
    pub price: Money,
}

/// A line of an order being placed. Only identity and quantity are sent;
/// the backend resolves current prices itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// Product to order.
    pub product_id: i64,
    /// Quantity to order.
    pub quantity: u32,
}
