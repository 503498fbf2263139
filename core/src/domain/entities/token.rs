//! Issued token values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Signed, self-contained access token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Compact serialized token
    pub token: String,

    /// Lifetime in seconds as configured at issuance
    pub expires_in: i64,
}

/// Opaque refresh token backed by a cache entry
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Lowercase hex string
    pub token: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &mask_token(&self.token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl std::fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshToken")
            .field("token", &mask_token(&self.token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Token pair returned to the client on login and refresh
///
/// Serializes to `{"access_token": ..., "expires_in": ..., "refresh_token": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,

    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access: AccessToken, refresh: RefreshToken) -> Self {
        Self {
            access_token: access.token,
            expires_in: access.expires_in,
            refresh_token: refresh.token,
        }
    }
}

/// Principal view recovered from a verified access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedUser {
    /// The `sub` claim
    pub identifier: String,

    /// All non-registered claims
    pub attributes: Map<String, Value>,
}

/// Shortens a token for log output, keeping only its first eight characters
pub fn mask_token(token: &str) -> String {
    match token.char_indices().nth(8) {
        Some((idx, _)) => format!("{}***", &token[..idx]),
        None => "***".to_string(),
    }
}
