//! Home-page slider configuration wrappers.

use reqwest::Method;

use szachmart_core::error::AppError;
use szachmart_entity::product::Product;
use szachmart_entity::slider::{SliderConfig, SliderConfigRequest};

use crate::ApiClient;

impl ApiClient {
    /// Fetches the current slider configuration.
    pub async fn slider_config(&self) -> Result<SliderConfig, AppError> {
        self.get_json("/slider-config").await
    }

    /// Replaces the slider's product list.
    pub async fn update_slider_config(
        &self,
        id: i64,
        products: Vec<Product>,
    ) -> Result<(), AppError> {
        self.send(
            self.request(Method::PUT, "/slider-config")
                .json(&SliderConfigRequest { id, products }),
        )
        .await?;
        Ok(())
    }
}
