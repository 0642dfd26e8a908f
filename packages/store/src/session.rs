//! # Session derivation from the stored bearer token
//!
//! The session token is a compact three-part credential
//! (`header.payload.signature`). The client never verifies the signature —
//! that is the backend's job on every request — so everything decoded here is
//! **display data only** and must never feed an authorization decision.
//!
//! ## Contract
//!
//! [`derive_session`] reads the token from a [`TokenStore`] and produces
//! either `None` (no session) or the [`UserIdentity`] encoded in the payload:
//!
//! 1. No stored token → `None`.
//! 2. Split on `.`, take the middle segment.
//! 3. Base64url-decode and JSON-parse it.
//! 4. `sub` becomes the user id, the `email` claim the email (default empty).
//!    `created_at` is not in the token and is synthesized as "now".
//! 5. Any decode or parse failure means the token is corrupt or from another
//!    era: the store is **cleared** and the result is `None`. This is the one
//!    place a read mutates storage.
//!
//! Once derived, the identity lives in the query cache until login or logout
//! replaces it; it is never re-derived on a timer or revalidated server-side.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;

use crate::models::UserIdentity;
use crate::token::TokenStore;

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: String,
}

/// Decode a bearer token's payload into a [`UserIdentity`].
///
/// Pure decode-for-display: no signature check, no storage access. Returns
/// `None` for anything that is not a well-formed three-part token with a
/// JSON payload carrying a `sub` claim.
pub fn decode_identity(token: &str) -> Option<UserIdentity> {
    let payload = token.split('.').nth(1)?;
    // Tokens are base64url without padding; tolerate padded encoders.
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&raw).ok()?;

    Some(UserIdentity {
        id: claims.sub,
        email: claims.email,
        created_at: now_iso(),
    })
}

/// Derive the current session from the stored token.
///
/// A token that fails to decode is treated as an invalid session and
/// removed from the store, so for any malformed token the store is empty
/// afterwards and repeated calls keep returning `None`.
pub fn derive_session(store: &dyn TokenStore) -> Option<UserIdentity> {
    let token = store.get()?;
    match decode_identity(&token) {
        Some(identity) => Some(identity),
        None => {
            store.clear();
            None
        }
    }
}

fn now_iso() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::MemoryTokenStore;

    fn encode_segment(json: &str) -> String {
        URL_SAFE_NO_PAD.encode(json.as_bytes())
    }

    fn make_token(payload_json: &str) -> String {
        let header = encode_segment(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = encode_segment(payload_json);
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_no_token_means_no_session() {
        let store = MemoryTokenStore::new();
        assert!(derive_session(&store).is_none());
        assert!(store.get().is_none());
    }

    #[test]
    fn test_valid_token_yields_matching_claims() {
        let store = MemoryTokenStore::new();
        let token = make_token(r#"{"sub":"user-42","email":"a@b.com","exp":9999999999}"#);
        store.set(&token);

        let identity = derive_session(&store).expect("session expected");
        assert_eq!(identity.id, "user-42");
        assert_eq!(identity.email, "a@b.com");
        assert!(!identity.created_at.is_empty());

        // A successful derivation must not disturb the stored token
        assert_eq!(store.get().as_deref(), Some(token.as_str()));
    }

    #[test]
    fn test_missing_email_claim_defaults_to_empty() {
        let store = MemoryTokenStore::new();
        store.set(&make_token(r#"{"sub":"user-7"}"#));

        let identity = derive_session(&store).expect("session expected");
        assert_eq!(identity.id, "user-7");
        assert_eq!(identity.email, "");
    }

    #[test]
    fn test_padded_payload_still_decodes() {
        let store = MemoryTokenStore::new();
        let header = encode_segment(r#"{"alg":"HS256"}"#);
        let mut payload = encode_segment(r#"{"sub":"padded","email":"p@d.com"}"#);
        while payload.len() % 4 != 0 {
            payload.push('=');
        }
        store.set(&format!("{header}.{payload}.sig"));

        let identity = derive_session(&store).expect("session expected");
        assert_eq!(identity.id, "padded");
    }

    #[test]
    fn test_malformed_tokens_clear_storage() {
        let malformed = [
            "garbage",
            "only.one-dot",
            "a.!!!not-base64!!!.c",
            // valid base64, invalid JSON
            &format!("h.{}.s", encode_segment("not json at all")),
            // valid JSON, no sub claim
            &make_token(r#"{"email":"a@b.com"}"#),
        ];

        for token in malformed {
            let store = MemoryTokenStore::new();
            store.set(token);

            assert!(derive_session(&store).is_none(), "token {token:?} should not decode");
            assert!(store.get().is_none(), "token {token:?} should have been cleared");

            // Idempotent: a second derivation finds empty storage and stays empty
            assert!(derive_session(&store).is_none());
            assert!(store.get().is_none());
        }
    }

    #[test]
    fn test_decode_identity_is_read_only() {
        // decode_identity never touches storage; the corrective clear
        // belongs to derive_session alone.
        assert!(decode_identity("garbage").is_none());
        let identity = decode_identity(&make_token(r#"{"sub":"x"}"#)).unwrap();
        assert_eq!(identity.id, "x");
    }
}
