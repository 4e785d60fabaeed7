//! Product catalog wrappers.

use reqwest::Method;

use szachmart_core::error::AppError;
use szachmart_entity::product::{Product, ProductRequest};

use crate::ApiClient;

impl ApiClient {
    /// Fetches the whole catalog.
    pub async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        self.get_json("/products").await
    }

    /// Fetches the products of one category.
    pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, AppError> {
        self.get_json(&format!("/products/category/{category}")).await
    }

    /// Fetches a single product.
    pub async fn product(&self, id: i64) -> Result<Product, AppError> {
        self.get_json(&format!("/products/{id}")).await
    }

    /// Lists a new product. Requires authentication; the backend records
    /// the caller as the product's author.
    pub async fn create_product(&self, request: &ProductRequest) -> Result<Product, AppError> {
        let response = self
            .send(self.request(Method::POST, "/products/").json(request))
            .await?;
        Ok(response.json().await?)
    }
}
