//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles grantable to a shop account.
///
/// The wire representation uses the backend's `ROLE_*` tags. A user holds a
/// non-empty set of roles in practice, but nothing on the client enforces
/// that — a decoded token is accepted with whatever set it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Regular customer.
    #[serde(rename = "ROLE_USER")]
    User,
    /// Can moderate product comments.
    #[serde(rename = "ROLE_MODERATOR")]
    Moderator,
    /// Full administrative access.
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Return the role as its wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Moderator => "ROLE_MODERATOR",
            Self::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = szachmart_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(Self::User),
            "ROLE_MODERATOR" => Ok(Self::Moderator),
            "ROLE_ADMIN" => Ok(Self::Admin),
            _ => Err(szachmart_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: ROLE_USER, ROLE_MODERATOR, ROLE_ADMIN"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("ROLE_ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("ROLE_USER".parse::<Role>().unwrap(), Role::User);
        assert!("admin".parse::<Role>().is_err());
        assert!("ROLE_OWNER".parse::<Role>().is_err());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Role::Moderator).unwrap(),
            "\"ROLE_MODERATOR\""
        );
        let role: Role = serde_json::from_str("\"ROLE_USER\"").unwrap();
        assert_eq!(role, Role::User);
    }
}
