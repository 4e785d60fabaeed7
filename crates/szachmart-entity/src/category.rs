//! Product category entity.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Category name, also used as the path segment in catalog lookups.
    pub name: String,
}
