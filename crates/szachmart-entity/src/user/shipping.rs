//! Shipping details value object.

use serde::{Deserialize, Serialize};

/// Shipping details attached to a user account and prefilled at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    /// Recipient name.
    pub shipping_name: String,
    /// Street address.
    pub shipping_address: String,
    /// City.
    pub shipping_city: String,
    /// Postal code.
    pub shipping_postal_code: String,
    /// Country.
    pub shipping_country: String,
}
