//! Builds the token services from `AuthConfig`

use gk_core::repositories::InMemoryCache;
use gk_core::services::{AccessTokenService, RefreshTokenStore, SessionTokenService};
use gk_core::TokenResult;
use gk_shared::config::AuthConfig;

use crate::cache::{RedisCache, RedisClient};
use crate::InfrastructureError;

/// Connects to Redis and builds the session service
///
/// Key material and refresh store settings are validated before any network
/// connection is attempted.
pub async fn build_session_service(
    config: &AuthConfig,
) -> Result<SessionTokenService<RedisCache>, InfrastructureError> {
    let access_tokens = AccessTokenService::from_config(&config.access)?;

    let client = RedisClient::new(config.cache.clone()).await?;
    let refresh_tokens = RefreshTokenStore::new(RedisCache::new(client), &config.refresh)?;

    Ok(SessionTokenService::new(access_tokens, refresh_tokens))
}

/// Builds the session service over a process-local cache
///
/// Refresh tokens do not survive a restart and are not shared between
/// processes.
pub fn build_in_memory_session_service(
    config: &AuthConfig,
) -> TokenResult<SessionTokenService<InMemoryCache>> {
    let access_tokens = AccessTokenService::from_config(&config.access)?;
    let refresh_tokens = RefreshTokenStore::new(InMemoryCache::new(), &config.refresh)?;

    Ok(SessionTokenService::new(access_tokens, refresh_tokens))
}
