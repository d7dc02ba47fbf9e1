//! Session Token Signing
//!
//! Tokens are `{session_id}.{signature}` where the signature is
//! HMAC-SHA256 over the session id string, base64url-encoded without
//! padding. The token proves the session id was minted by this server;
//! validity and expiry are checked against the stored session.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use kernel::id::SessionId;
use uuid::Uuid;

use platform::crypto::{constant_time_eq, hmac_sha256};

/// Sign a session id into a cookie-safe token.
pub fn sign_session_token(secret: &[u8; 32], session_id: &SessionId) -> String {
    let id_str = session_id.to_string();
    let mac = hmac_sha256(secret, id_str.as_bytes());

    format!("{}.{}", id_str, URL_SAFE_NO_PAD.encode(mac))
}

/// Verify a token's signature and extract the session id.
///
/// Returns `None` for any malformed or forged token; callers map that to
/// an invalid-session error without distinguishing the failure mode.
pub fn verify_session_token(secret: &[u8; 32], token: &str) -> Option<SessionId> {
    let (id_str, signature_b64) = token.split_once('.')?;

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    let expected = hmac_sha256(secret, id_str.as_bytes());

    if !constant_time_eq(&expected, &signature) {
        return None;
    }

    let uuid: Uuid = id_str.parse().ok()?;
    Some(SessionId::from_uuid(uuid))
}
