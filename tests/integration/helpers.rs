//! Shared helpers for integration tests.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;

use szachmart_entity::user::Role;

#[derive(Serialize)]
struct MintedClaims<'a> {
    sub: &'a str,
    roles: &'a [Role],
    iat: i64,
    exp: i64,
}

/// Mint a signed HS256 token the way the backend issues them.
pub fn mint_token(sub: &str, roles: &[Role], exp: DateTime<Utc>) -> String {
    let claims = MintedClaims {
        sub,
        roles,
        iat: exp.timestamp() - 3600,
        exp: exp.timestamp(),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"integration-test-secret"),
    )
    .unwrap()
}
