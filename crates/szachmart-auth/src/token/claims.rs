//! Access token claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use szachmart_entity::user::Role;

/// Claims payload embedded in every access token issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username.
    pub sub: String,
    /// Roles granted at the time of token issuance. May be empty.
    pub roles: Vec<Role>,
    /// Issued-at timestamp (seconds since epoch). Absent in some tokens.
    #[serde(default)]
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired as of `now`.
    ///
    /// Expiry is evaluated lazily at read time; a token revoked on the
    /// server is not detected here before its expiry passes.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let claims = Claims {
            sub: "kasparov".to_string(),
            roles: vec![Role::User],
            iat: now.timestamp(),
            exp: now.timestamp(),
        };
        // exp == now counts as expired
        assert!(claims.is_expired_at(now));
        assert!(!claims.is_expired_at(now - Duration::seconds(1)));
    }
}
