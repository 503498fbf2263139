//! Access token and refresh token configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{env_opt, env_or};

/// Access token (signed JWT) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessTokenConfig {
    /// Signing algorithm identifier (case-insensitive, e.g. `HS512`, `ES256`, `EdDSA`)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Base64-encoded shared secret for symmetric algorithms
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Path to the PEM private key for asymmetric algorithms
    #[serde(default)]
    pub private_key_path: Option<PathBuf>,

    /// Path to the PEM public key for asymmetric algorithms
    #[serde(default)]
    pub public_key_path: Option<PathBuf>,

    /// Passphrase for an encrypted PKCS#8 private key
    #[serde(default)]
    pub passphrase: Option<String>,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_ttl")]
    pub ttl_seconds: i64,

    /// `iss` claim written at issuance and required at validation
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// `aud` claim written at issuance and required at validation
    #[serde(default)]
    pub audience: String,

    /// Clock skew tolerated on `exp`/`nbf`, in seconds
    #[serde(default)]
    pub leeway_seconds: i64,

    /// Copy principal attributes into the token as custom claims
    #[serde(default)]
    pub embed_attributes: bool,
}

impl Default for AccessTokenConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            secret_key: None,
            private_key_path: None,
            public_key_path: None,
            passphrase: None,
            ttl_seconds: default_access_ttl(),
            issuer: default_issuer(),
            audience: String::new(),
            leeway_seconds: 0,
            embed_attributes: false,
        }
    }
}

impl AccessTokenConfig {
    /// Create a symmetric configuration from a base64-encoded secret
    pub fn with_secret(algorithm: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            secret_key: Some(secret_key.into()),
            ..Default::default()
        }
    }

    /// Create an asymmetric configuration from PEM key file paths
    pub fn with_key_files(
        algorithm: impl Into<String>,
        private_key_path: impl Into<PathBuf>,
        public_key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            private_key_path: Some(private_key_path.into()),
            public_key_path: Some(public_key_path.into()),
            ..Default::default()
        }
    }

    /// Set issuer and audience
    pub fn with_binding(mut self, issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self.audience = audience.into();
        self
    }

    /// Set the token lifetime in seconds
    pub fn with_ttl(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    /// Set the clock skew leeway in seconds
    pub fn with_leeway(mut self, leeway_seconds: i64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    /// Create from environment variables
    ///
    /// - `JWT_ALGORITHM` (default `HS512`)
    /// - `JWT_SECRET_KEY` (base64)
    /// - `JWT_PRIVATE_KEY_PATH`, `JWT_PUBLIC_KEY_PATH`, `JWT_PASSPHRASE`
    /// - `JWT_ACCESS_TOKEN_TTL` (seconds, default 600)
    /// - `JWT_ISSUER`, `JWT_AUDIENCE`, `JWT_LEEWAY`
    /// - `JWT_EMBED_ATTRIBUTES`
    pub fn from_env() -> Self {
        Self {
            algorithm: env_opt("JWT_ALGORITHM").unwrap_or_else(default_algorithm),
            secret_key: env_opt("JWT_SECRET_KEY"),
            private_key_path: env_opt("JWT_PRIVATE_KEY_PATH").map(PathBuf::from),
            public_key_path: env_opt("JWT_PUBLIC_KEY_PATH").map(PathBuf::from),
            passphrase: env_opt("JWT_PASSPHRASE"),
            ttl_seconds: env_or("JWT_ACCESS_TOKEN_TTL", default_access_ttl()),
            issuer: env_opt("JWT_ISSUER").unwrap_or_else(default_issuer),
            audience: env_opt("JWT_AUDIENCE").unwrap_or_default(),
            leeway_seconds: env_or("JWT_LEEWAY", 0),
            embed_attributes: env_or("JWT_EMBED_ATTRIBUTES", false),
        }
    }
}

/// Refresh token (opaque, cache-backed) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshTokenConfig {
    /// Namespace for this store's cache keys
    #[serde(default = "default_refresh_prefix")]
    pub prefix: String,

    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_ttl")]
    pub ttl_seconds: i64,

    /// Length of the token string in hex characters (even, at least 16)
    #[serde(default = "default_refresh_length")]
    pub length: usize,

    /// Allow only one live refresh token per subject
    #[serde(default)]
    pub single_session: bool,
}

impl Default for RefreshTokenConfig {
    fn default() -> Self {
        Self {
            prefix: default_refresh_prefix(),
            ttl_seconds: default_refresh_ttl(),
            length: default_refresh_length(),
            single_session: false,
        }
    }
}

impl RefreshTokenConfig {
    /// Enable or disable single-session mode
    pub fn with_single_session(mut self, single_session: bool) -> Self {
        self.single_session = single_session;
        self
    }

    /// Set the token length in hex characters
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Full cache namespace for this store
    pub fn namespace(&self) -> String {
        format!("gatekeep:jwt_refresh_token:{}", self.prefix)
    }

    /// Create from environment variables
    ///
    /// - `REFRESH_TOKEN_PREFIX` (default `default`)
    /// - `REFRESH_TOKEN_TTL` (seconds, default 14 days)
    /// - `REFRESH_TOKEN_LENGTH` (default 64)
    /// - `REFRESH_TOKEN_SINGLE_SESSION` (default false)
    pub fn from_env() -> Self {
        Self {
            prefix: env_opt("REFRESH_TOKEN_PREFIX").unwrap_or_else(default_refresh_prefix),
            ttl_seconds: env_or("REFRESH_TOKEN_TTL", default_refresh_ttl()),
            length: env_or("REFRESH_TOKEN_LENGTH", default_refresh_length()),
            single_session: env_or("REFRESH_TOKEN_SINGLE_SESSION", false),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS512")
}

fn default_access_ttl() -> i64 {
    600 // 10 minutes
}

fn default_issuer() -> String {
    String::from("gatekeep")
}

fn default_refresh_prefix() -> String {
    String::from("default")
}

fn default_refresh_ttl() -> i64 {
    60 * 60 * 24 * 14 // 14 days
}

fn default_refresh_length() -> usize {
    64
}
