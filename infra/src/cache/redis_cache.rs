//! `CacheBackend` over Redis

use async_trait::async_trait;
use gk_core::errors::CacheError;
use gk_core::repositories::CacheBackend;

use crate::InfrastructureError;

use super::redis_client::RedisClient;

/// Refresh token backend storing entries as Redis strings with `SETEX`
///
/// Keys are prefixed with `CacheConfig::key_prefix` when one is set.
#[derive(Debug, Clone)]
pub struct RedisCache {
    client: RedisClient,
}

impl RedisCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &RedisClient {
        &self.client
    }

    fn key(&self, key: &str) -> String {
        self.client.config().make_key(key)
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.client
            .get(&self.key(key))
            .await
            .map_err(|e| to_cache_error("get", e))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        self.client
            .set_with_expiry(&self.key(key), value, ttl_seconds)
            .await
            .map_err(|e| to_cache_error("set", e))
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.client
            .delete(&self.key(key))
            .await
            .map(|_| ())
            .map_err(|e| to_cache_error("delete", e))
    }
}

/// Connection-level failures are `Unavailable`; everything else is an
/// operation failure
pub(crate) fn to_cache_error(operation: &str, err: InfrastructureError) -> CacheError {
    match err {
        InfrastructureError::Cache(e)
            if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() =>
        {
            CacheError::Unavailable(e.to_string())
        }
        other => CacheError::operation(operation, other),
    }
}
