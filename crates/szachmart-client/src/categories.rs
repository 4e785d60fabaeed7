//! Category listing wrapper.

use szachmart_core::error::AppError;
use szachmart_entity::category::Category;

use crate::ApiClient;

impl ApiClient {
    /// Fetches all product categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.get_json("/categories").await
    }
}
