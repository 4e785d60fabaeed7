//! Unverified access token payload decoding.
//!
//! The client trusts the token it was handed at sign-in and only needs the
//! claims out of it; signature verification and revocation are enforced by
//! the backend on every authenticated request. Whether that trust model is
//! sufficient is a server-side question — this decoder deliberately reads
//! nothing but the payload segment.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use szachmart_core::error::AppError;

use super::claims::Claims;

/// Decodes the claims out of a raw three-segment access token.
///
/// Fails with [`ErrorKind::MalformedToken`](szachmart_core::error::ErrorKind)
/// if the string does not have exactly three dot-separated segments, the
/// payload segment is not valid Base64url, or the payload JSON lacks the
/// required fields (`sub`, `roles`, `exp`).
///
/// Pure: no side effects, no expiry check. Expiry belongs to
/// [`derive_session`](crate::session::derive_session).
pub fn decode(raw: &str) -> Result<Claims, AppError> {
    let mut segments = raw.split('.');
    let (_header, payload) = match (segments.next(), segments.next(), segments.next()) {
        (Some(h), Some(p), Some(_signature)) if segments.next().is_none() => (h, p),
        _ => {
            return Err(AppError::malformed_token(
                "Token does not have three segments",
            ));
        }
    };

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| AppError::malformed_token(format!("Payload is not valid Base64url: {e}")))?;

    serde_json::from_slice(&payload_bytes)
        .map_err(|e| AppError::malformed_token(format!("Payload is not a valid claims object: {e}")))
}
