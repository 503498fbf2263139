//! Claim set carried in an access token payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registered claim names; everything else is a custom claim
pub const REGISTERED_CLAIMS: [&str; 7] = ["iss", "sub", "aud", "iat", "exp", "nbf", "jti"];

/// Claims holding integer Unix timestamps
pub(crate) const TEMPORAL_CLAIMS: [&str; 3] = ["iat", "exp", "nbf"];

/// Returns true for `iss`, `sub`, `aud`, `iat`, `exp`, `nbf` and `jti`
pub fn is_registered_claim(name: &str) -> bool {
    REGISTERED_CLAIMS.contains(&name)
}

/// Mapping from claim name to JSON value
///
/// Serializes with sorted keys. Temporal claims are stored as integer
/// seconds since the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a claim, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn issuer(&self) -> Option<&str> {
        self.string_claim("iss")
    }

    pub fn subject(&self) -> Option<&str> {
        self.string_claim("sub")
    }

    /// Raw `aud` claim, a string or an array of strings
    pub fn audience(&self) -> Option<&Value> {
        self.0.get("aud")
    }

    pub fn token_id(&self) -> Option<&str> {
        self.string_claim("jti")
    }

    pub fn issued_at(&self) -> Option<i64> {
        self.int_claim("iat")
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.int_claim("exp")
    }

    pub fn not_before(&self) -> Option<i64> {
        self.int_claim("nbf")
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    fn string_claim(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    fn int_claim(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Copies every non-registered claim out of `claims`
pub fn custom_claims(claims: &ClaimSet) -> Map<String, Value> {
    claims
        .0
        .iter()
        .filter(|(name, _)| !is_registered_claim(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
