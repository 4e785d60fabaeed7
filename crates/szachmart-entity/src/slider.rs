//! Home-page slider configuration entity.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Configuration of the home-page product slider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    /// Configuration record identifier.
    pub id: i64,
    /// Products shown in the slider, in display order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// How many products are visible at once.
    #[serde(default = "default_display_count")]
    pub display_count: u32,
}

fn default_display_count() -> u32 {
    3
}

/// The request body for replacing the slider contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfigRequest {
    /// Configuration record identifier.
    pub id: i64,
    /// Replacement product list, in display order.
    pub products: Vec<Product>,
}
