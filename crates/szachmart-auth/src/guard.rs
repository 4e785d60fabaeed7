//! Role-based route authorization.
//!
//! A pure decision over a derived [`Session`] and a per-route requirement.
//! Safe to evaluate on every navigation; the only cost upstream is the
//! token decode in [`derive_session`](crate::session::derive_session).

use std::collections::HashSet;

use szachmart_entity::user::Role;

use crate::session::Session;

/// The role requirement protecting a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSpec {
    /// Roles of which at least one must be held. Empty means any
    /// authenticated session is enough.
    pub required_roles: HashSet<Role>,
}

impl RouteSpec {
    /// A route requiring authentication only.
    pub fn authenticated_only() -> Self {
        Self::default()
    }

    /// A route requiring at least one of the given roles.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            required_roles: roles.into_iter().collect(),
        }
    }
}

/// The outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The session may enter the route.
    Allow,
    /// No live session; send the visitor to the login page.
    RedirectLogin,
    /// Authenticated but lacking every required role; send home.
    RedirectHome,
}

/// Decides whether `session` may enter a route protected by `spec`.
///
/// An unauthenticated session is redirected to login regardless of the
/// spec. Role matching is at-least-one-of, not all-of.
pub fn authorize(session: &Session, spec: &RouteSpec) -> Access {
    if !session.authenticated {
        return Access::RedirectLogin;
    }

    if spec.required_roles.is_empty() {
        return Access::Allow;
    }

    if spec.required_roles.iter().any(|r| session.roles.contains(r)) {
        Access::Allow
    } else {
        Access::RedirectHome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(roles: &[Role]) -> Session {
        Session {
            authenticated: true,
            subject: Some("test".to_string()),
            roles: roles.iter().copied().collect(),
        }
    }

    #[test]
    fn test_unauthenticated_always_redirects_to_login() {
        let anon = Session::anonymous();
        assert_eq!(
            authorize(&anon, &RouteSpec::authenticated_only()),
            Access::RedirectLogin
        );
        assert_eq!(
            authorize(&anon, &RouteSpec::any_of([Role::Admin])),
            Access::RedirectLogin
        );
    }

    #[test]
    fn test_authenticated_only_route_allows_any_role_set() {
        let spec = RouteSpec::authenticated_only();
        assert_eq!(authorize(&session_with(&[Role::User]), &spec), Access::Allow);
        assert_eq!(authorize(&session_with(&[]), &spec), Access::Allow);
    }

    #[test]
    fn test_missing_role_redirects_home() {
        let spec = RouteSpec::any_of([Role::Admin]);
        assert_eq!(
            authorize(&session_with(&[Role::Moderator]), &spec),
            Access::RedirectHome
        );
        assert_eq!(
            authorize(&session_with(&[]), &spec),
            Access::RedirectHome
        );
    }

    #[test]
    fn test_any_of_semantics() {
        let spec = RouteSpec::any_of([Role::Admin, Role::Moderator]);
        // Holding one of the required roles is enough
        assert_eq!(
            authorize(&session_with(&[Role::Admin]), &spec),
            Access::Allow
        );
        assert_eq!(
            authorize(&session_with(&[Role::Moderator, Role::User]), &spec),
            Access::Allow
        );
        assert_eq!(
            authorize(&session_with(&[Role::User]), &spec),
            Access::RedirectHome
        );
    }
}
