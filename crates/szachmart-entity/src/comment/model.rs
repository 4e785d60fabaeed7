//! Comment entity model.

use serde::{Deserialize, Serialize};

use super::status::CommentStatus;

/// A product comment as returned by the comment endpoints.
///
/// Timestamps arrive as backend-local datetime strings and are kept verbatim
/// for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// Username of the author.
    pub author_name: String,
    /// Creation timestamp string.
    pub created_at: String,
    /// Moderation status.
    pub status: CommentStatus,
    /// Product the comment belongs to.
    pub product_id: i64,
    /// Name of that product (for the moderation queue view).
    #[serde(default)]
    pub product_name: String,
}
