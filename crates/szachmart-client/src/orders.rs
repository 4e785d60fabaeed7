//! Order placement and history wrappers.

use reqwest::Method;

use szachmart_core::error::AppError;
use szachmart_entity::order::{Order, OrderItemRequest, OrderRequest, OrderStatus};

use crate::ApiClient;

impl ApiClient {
    /// Places an order for the given lines. Requires authentication.
    pub async fn create_order(&self, order_items: Vec<OrderItemRequest>) -> Result<(), AppError> {
        self.send(
            self.request(Method::POST, "/orders")
                .json(&OrderRequest { order_items }),
        )
        .await?;
        Ok(())
    }

    /// Fetches the calling user's order history.
    pub async fn my_orders(&self) -> Result<Vec<Order>, AppError> {
        self.get_json("/orders").await
    }

    /// Fetches every order in the shop (admin view).
    pub async fn all_orders(&self) -> Result<Vec<Order>, AppError> {
        self.get_json("/orders/all").await
    }

    /// Updates an order's fulfilment status. The backend takes the status
    /// tag as a plain-text body.
    pub async fn set_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), AppError> {
        self.send(
            self.request(Method::PUT, &format!("/orders/{order_id}/status"))
                .body(status.as_str()),
        )
        .await?;
        Ok(())
    }
}
