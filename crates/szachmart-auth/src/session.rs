//! Session derivation from the token slot.
//!
//! The session is never stored; it is recomputed from the slot on each
//! check. This module is the single owner of expiry logic — no other
//! component re-implements it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::warn;

use szachmart_entity::user::Role;

use crate::store::TokenStore;
use crate::token;

/// The derived authentication/authorization state for the current token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Whether a live (present, well-formed, unexpired) token backs this session.
    pub authenticated: bool,
    /// Subject of the token (the username), when authenticated.
    pub subject: Option<String>,
    /// Granted roles; empty when unauthenticated.
    pub roles: HashSet<Role>,
}

impl Session {
    /// The unauthenticated session.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            subject: None,
            roles: HashSet::new(),
        }
    }

    /// Check whether this session holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Derives the current session from the token slot as of `now`.
///
/// A malformed or expired token is treated as unauthenticated **and** the
/// slot is cleared, so corrupt state heals itself on the next read. Expiry
/// is enforced only here, lazily; there is no timer and no revocation poll.
pub fn derive_session(store: &dyn TokenStore, now: DateTime<Utc>) -> Session {
    let raw = match store.load() {
        Ok(Some(raw)) => raw,
        Ok(None) => return Session::anonymous(),
        Err(e) => {
            warn!(error = %e, "Failed to read token slot");
            return Session::anonymous();
        }
    };

    let claims = match token::decode(&raw) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(error = %e, "Stored token is malformed, clearing slot");
            clear_slot(store);
            return Session::anonymous();
        }
    };

    if claims.is_expired_at(now) {
        warn!(subject = %claims.sub, "Stored token has expired, clearing slot");
        clear_slot(store);
        return Session::anonymous();
    }

    Session {
        authenticated: true,
        subject: Some(claims.sub),
        roles: claims.roles.into_iter().collect(),
    }
}

/// Best-effort slot clearing; a failed clear must not mask the
/// unauthenticated outcome.
fn clear_slot(store: &dyn TokenStore) {
    if let Err(e) = store.clear() {
        warn!(error = %e, "Failed to clear token slot");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    use crate::store::MemoryTokenStore;

    fn mint(sub: &str, roles: &[&str], exp: i64) -> String {
        encode(
            &Header::default(),
            &json!({ "sub": sub, "roles": roles, "iat": exp - 3600, "exp": exp }),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_slot_is_anonymous() {
        let store = MemoryTokenStore::new();
        let session = derive_session(&store, Utc::now());
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_live_token_authenticates() {
        let now = Utc::now();
        let token = mint("fischer", &["ROLE_USER", "ROLE_MODERATOR"], now.timestamp() + 600);
        let store = MemoryTokenStore::with_token(token);

        let session = derive_session(&store, now);
        assert!(session.authenticated);
        assert_eq!(session.subject.as_deref(), Some("fischer"));
        assert!(session.has_role(Role::User));
        assert!(session.has_role(Role::Moderator));
        assert!(!session.has_role(Role::Admin));
        // The slot is untouched
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn test_expired_token_clears_slot() {
        let now = Utc::now();
        let token = mint("fischer", &["ROLE_USER"], now.timestamp() - 1);
        let store = MemoryTokenStore::with_token(token);

        let session = derive_session(&store, now);
        assert!(!session.authenticated);
        assert!(session.roles.is_empty());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_expiry_is_evaluated_lazily() {
        let now = Utc::now();
        let token = mint("fischer", &["ROLE_USER"], now.timestamp() + 5);
        let store = MemoryTokenStore::with_token(token);

        assert!(derive_session(&store, now).authenticated);
        // Same token, later clock: now unauthenticated and healed away
        let later = now + Duration::seconds(10);
        assert!(!derive_session(&store, later).authenticated);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_malformed_token_clears_slot() {
        let store = MemoryTokenStore::with_token("garbage");
        let session = derive_session(&store, Utc::now());
        assert!(!session.authenticated);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_empty_role_set_still_authenticates() {
        let now = Utc::now();
        let token = mint("ghost", &[], now.timestamp() + 600);
        let store = MemoryTokenStore::with_token(token);

        let session = derive_session(&store, now);
        assert!(session.authenticated);
        assert!(session.roles.is_empty());
    }
}
