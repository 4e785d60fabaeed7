//! Product catalog entities.

use serde::{Deserialize, Serialize};

use szachmart_core::types::Money;

/// A product record as returned by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Name of the category this product belongs to.
    #[serde(default)]
    pub category_name: String,
    /// Author or maker, where applicable (books, sets).
    #[serde(default)]
    pub author_name: String,
    /// URL of the product image.
    #[serde(default)]
    pub image_url: String,
}

/// The request body for listing a new product.
///
/// The image URL may be left empty; the backend fills it in when an image
/// is attached separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Category the product belongs to.
    pub category_name: String,
    /// URL of the product image.
    #[serde(default)]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_request_wire_shape() {
        let request = ProductRequest {
            name: "Szachownica klubowa".to_string(),
            description: "Drewniana, pole 50 mm".to_string(),
            price: Money::from_minor(18900),
            category_name: "Szachownice".to_string(),
            image_url: String::new(),
        };

        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        assert_eq!(json["categoryName"], "Szachownice");
        assert_eq!(json["price"], "189.00");
        assert_eq!(json["imageUrl"], "");
    }
}
