//! Session handling: token storage and bearer-token decoding.
//!
//! The access token lives in `sessionStorage` so it dies with the tab; the
//! refresh token lives in `localStorage` and survives. Decoding only reads
//! the payload claims — the server that issued the token is the trust
//! boundary, so no signature verification happens here.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use omg_common::TokenPair;
use omg_ui::stores::AuthUser;
use serde::Deserialize;

const ACCESS_TOKEN_KEY: &str = "omg_token";
const REFRESH_TOKEN_KEY: &str = "omg_refresh_token";

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn set_access(token: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn access() -> Option<String> {
    session_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
}

pub fn clear_access() {
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}

pub fn set_refresh(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

pub fn refresh() -> Option<String> {
    local_storage()?.get_item(REFRESH_TOKEN_KEY).ok().flatten()
}

pub fn clear_refresh() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

/// Persist a freshly issued token pair.
pub fn store_tokens(pair: &TokenPair) {
    set_access(&pair.access_token);
    set_refresh(&pair.refresh_token);
}

/// Drop the whole session from both storage scopes.
pub fn logout() {
    clear_access();
    clear_refresh();
}

/// The claims this client cares about.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
}

/// Decode a bearer token's payload. Malformed input yields `None` — the
/// absent-user signal — and never an error.
pub fn decode(token: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    let _header = parts.next()?;
    let payload = parts.next()?;
    let _signature = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// A token is valid iff it decodes and expires strictly after `now`
/// (Unix seconds).
pub fn is_valid_at(token: &str, now: i64) -> bool {
    decode(token).is_some_and(|claims| claims.exp > now)
}

/// Whether the stored access token is currently valid.
pub fn is_authenticated() -> bool {
    access().is_some_and(|token| is_valid_at(&token, Utc::now().timestamp()))
}

/// The user as decoded from the stored access token.
pub fn current_user() -> Option<AuthUser> {
    let claims = decode(&access()?)?;
    Some(AuthUser {
        username: claims.sub,
        expires_at: claims.exp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge_token(payload: &str) -> String {
        format!(
            "eyJhbGciOiJIUzI1NiJ9.{}.c2ln",
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_reads_subject_and_expiry() {
        let token = forge_token(r#"{"sub":"alice","exp":2000000000}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp, 2_000_000_000);
    }

    #[test]
    fn test_decode_malformed_token_is_none() {
        assert!(decode("").is_none());
        assert!(decode("just-a-string").is_none());
        assert!(decode("a.b").is_none());
        assert!(decode("a.b.c.d").is_none());
        assert!(decode("a.!!!not-base64!!!.c").is_none());

        let no_exp = forge_token(r#"{"sub":"alice"}"#);
        assert!(decode(&no_exp).is_none());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let token = forge_token(r#"{"sub":"alice","exp":1000}"#);
        assert!(!is_valid_at(&token, 1000));
        assert!(!is_valid_at(&token, 1001));
        assert!(is_valid_at(&token, 999));
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        assert!(!is_valid_at("garbage", 0));
    }
}
