//! Cache backend trait used by the refresh token store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CacheError;

/// Key-value cache with per-entry expiry
///
/// Implementations must treat values as opaque strings. A missing or expired
/// key is `Ok(None)`, never an error; errors are reserved for transport
/// failures.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Fetch the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Live entry found
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(CacheError)` - Backend unreachable
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, expiring after `ttl_seconds`
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError>;

    /// Remove `key`; deleting a missing key succeeds
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

#[async_trait]
impl<T: CacheBackend + ?Sized> CacheBackend for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), CacheError> {
        (**self).set(key, value, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key).await
    }
}
