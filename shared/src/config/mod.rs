//! Configuration module
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Access token and refresh token policies
//! - `cache` - Redis cache configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod cache;
pub mod environment;

use serde::{Deserialize, Serialize};

pub use auth::{AccessTokenConfig, RefreshTokenConfig};
pub use cache::CacheConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete token lifecycle configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Access token policy
    pub access: AccessTokenConfig,

    /// Refresh token policy
    pub refresh: RefreshTokenConfig,

    /// Cache backend configuration
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            access: AccessTokenConfig::default(),
            refresh: RefreshTokenConfig::default(),
            cache: CacheConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file is read first when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            access: AccessTokenConfig::from_env(),
            refresh: RefreshTokenConfig::from_env(),
            cache: CacheConfig::from_env(),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is unset or does not parse.
pub(crate) fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Read an optional, non-empty environment variable
pub(crate) fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_on_parse_failure() {
        std::env::set_var("GK_TEST_ENV_OR_BAD", "not-a-number");
        assert_eq!(env_or("GK_TEST_ENV_OR_BAD", 42i64), 42);
        std::env::remove_var("GK_TEST_ENV_OR_BAD");
    }

    #[test]
    fn test_env_opt_ignores_empty_values() {
        std::env::set_var("GK_TEST_ENV_OPT_EMPTY", "");
        assert!(env_opt("GK_TEST_ENV_OPT_EMPTY").is_none());
        std::env::remove_var("GK_TEST_ENV_OPT_EMPTY");
    }

    #[test]
    fn test_default_auth_config() {
        let config = AuthConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.access.algorithm, "HS512");
    }
}
