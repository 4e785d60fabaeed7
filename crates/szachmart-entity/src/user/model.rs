//! User entity model.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// A registered shop account as returned by the user endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Granted roles.
    #[serde(default)]
    pub roles: Vec<RoleAssignment>,
    /// Shipping recipient name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_name: Option<String>,
    /// Shipping street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    /// Shipping city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_city: Option<String>,
    /// Shipping postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_postal_code: Option<String>,
    /// Shipping country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_country: Option<String>,
}

/// A role row as the backend serializes it (role records have their own ids).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    /// Role record identifier.
    pub id: i64,
    /// The granted role.
    pub name: Role,
}
