//! Configuration for the access token service

use gk_shared::config::AccessTokenConfig;

use super::validator::ValidationPolicy;

/// Issuance and validation settings, independent of key material
#[derive(Debug, Clone)]
pub struct AccessTokenServiceConfig {
    /// Token lifetime in seconds; negative values issue already-expired tokens
    pub ttl_seconds: i64,
    pub issuer: String,
    pub audience: String,
    pub leeway_seconds: i64,
    /// Copy non-registered principal attributes into the token
    pub embed_attributes: bool,
}

impl Default for AccessTokenServiceConfig {
    fn default() -> Self {
        Self::from(&AccessTokenConfig::default())
    }
}

impl From<&AccessTokenConfig> for AccessTokenServiceConfig {
    fn from(config: &AccessTokenConfig) -> Self {
        Self {
            ttl_seconds: config.ttl_seconds,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway_seconds: config.leeway_seconds,
            embed_attributes: config.embed_attributes,
        }
    }
}

impl AccessTokenServiceConfig {
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            ttl_seconds,
            issuer: issuer.into(),
            audience: audience.into(),
            ..Default::default()
        }
    }

    pub fn with_leeway(mut self, leeway_seconds: i64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    pub fn with_embedded_attributes(mut self, embed: bool) -> Self {
        self.embed_attributes = embed;
        self
    }

    /// Policy enforced when parsing
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy::new(self.issuer.clone(), self.audience.clone())
            .with_leeway(self.leeway_seconds)
    }
}
