//! Comment moderation status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moderation status of a product comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommentStatus {
    /// Awaiting moderator review; not publicly visible.
    Pending,
    /// Approved by a moderator and publicly visible.
    Accepted,
    /// Rejected by a moderator.
    Rejected,
}

impl CommentStatus {
    /// Return the status as its wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommentStatus {
    type Err = szachmart_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(szachmart_core::AppError::validation(format!(
                "Invalid comment status: '{s}'. Expected one of: PENDING, ACCEPTED, REJECTED"
            ))),
        }
    }
}
