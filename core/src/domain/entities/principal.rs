//! Authenticated principal handed to the token services.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity assertion produced by primary authentication
///
/// Owned by the caller. The token services only read it; the refresh store
/// persists it as JSON and hands back an equal value on resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalToken {
    /// Guard (realm) that authenticated the principal
    pub guard_name: String,

    /// Stable user identifier, becomes the `sub` claim
    pub user_identifier: String,

    /// Named attributes attached by the authenticator
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl PrincipalToken {
    /// Creates a principal without attributes
    pub fn new(guard_name: impl Into<String>, user_identifier: impl Into<String>) -> Self {
        Self {
            guard_name: guard_name.into(),
            user_identifier: user_identifier.into(),
            attributes: Map::new(),
        }
    }

    /// Adds a named attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn user_identifier(&self) -> &str {
        &self.user_identifier
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}
