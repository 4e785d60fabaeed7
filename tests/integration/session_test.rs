//! Integration tests for the login/session/guard lifecycle.

mod helpers;

use chrono::{Duration, Utc};

use szachmart_auth::guard::{Access, RouteSpec, authorize};
use szachmart_auth::session::derive_session;
use szachmart_auth::store::{FileTokenStore, TokenStore};
use szachmart_entity::user::Role;

#[test]
fn test_login_to_logout_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    let now = Utc::now();

    // Before login: everything redirects to the login page
    let session = derive_session(&store, now);
    assert!(!session.authenticated);
    assert_eq!(
        authorize(&session, &RouteSpec::authenticated_only()),
        Access::RedirectLogin
    );

    // "Login" stores a token; the session is derived fresh from the slot
    let token = helpers::mint_token("fischer", &[Role::User], now + Duration::hours(1));
    store.save(&token).unwrap();

    let session = derive_session(&store, now);
    assert!(session.authenticated);
    assert_eq!(session.subject.as_deref(), Some("fischer"));
    assert_eq!(
        authorize(&session, &RouteSpec::authenticated_only()),
        Access::Allow
    );

    // A customer cannot enter user administration
    assert_eq!(
        authorize(&session, &RouteSpec::any_of([Role::Admin])),
        Access::RedirectHome
    );

    // Logout clears the slot; the next derivation is anonymous again
    store.clear().unwrap();
    assert!(!derive_session(&store, now).authenticated);
}

#[test]
fn test_expired_token_is_healed_from_the_slot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    let now = Utc::now();

    let token = helpers::mint_token("tal", &[Role::Admin], now - Duration::seconds(1));
    store.save(&token).unwrap();

    let session = derive_session(&store, now);
    assert!(!session.authenticated);
    assert!(session.roles.is_empty());
    // The corrupt state healed itself: the slot is empty on disk
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_corrupted_slot_is_healed() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    store.save("not.a-token").unwrap();

    assert!(!derive_session(&store, Utc::now()).authenticated);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_moderator_route_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::new(dir.path().join("token"));
    let now = Utc::now();
    let exp = now + Duration::hours(1);

    let moderation = RouteSpec::any_of([Role::Admin, Role::Moderator]);
    let administration = RouteSpec::any_of([Role::Admin]);

    // A moderator reaches the moderation queue but not user administration
    store
        .save(&helpers::mint_token("judit", &[Role::User, Role::Moderator], exp))
        .unwrap();
    let session = derive_session(&store, now);
    assert_eq!(authorize(&session, &moderation), Access::Allow);
    assert_eq!(authorize(&session, &administration), Access::RedirectHome);

    // An admin reaches both
    store
        .save(&helpers::mint_token("magnus", &[Role::Admin], exp))
        .unwrap();
    let session = derive_session(&store, now);
    assert_eq!(authorize(&session, &moderation), Access::Allow);
    assert_eq!(authorize(&session, &administration), Access::Allow);
}
