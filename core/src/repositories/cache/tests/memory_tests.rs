//! Unit tests for InMemoryCache

use std::sync::Arc;
use std::time::Duration;

use crate::repositories::cache::{CacheBackend, InMemoryCache};

#[tokio::test]
async fn test_set_then_get() {
    let cache = InMemoryCache::new();
    cache.set("k", "v", 60).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
    assert_eq!(cache.get("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_overwrites() {
    let cache = InMemoryCache::new();
    cache.set("k", "first", 60).await.unwrap();
    cache.set("k", "second", 60).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap(), Some("second".to_string()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_huge_ttl_is_capped() {
    let cache = InMemoryCache::new();
    cache.set("k", "v", u64::MAX).await.unwrap();

    assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let cache = InMemoryCache::new();
    cache.set("k", "v", 60).await.unwrap();

    cache.delete("k").await.unwrap();
    cache.delete("k").await.unwrap();
    cache.delete("never-set").await.unwrap();

    assert_eq!(cache.get("k").await.unwrap(), None);
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire() {
    let cache = InMemoryCache::new();
    cache.set("short", "v", 5).await.unwrap();
    cache.set("long", "v", 60).await.unwrap();

    tokio::time::advance(Duration::from_secs(6)).await;

    assert_eq!(cache.get("short").await.unwrap(), None);
    assert_eq!(cache.get("long").await.unwrap(), Some("v".to_string()));
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_shared_through_arc() {
    let cache = Arc::new(InMemoryCache::new());
    let backend: Arc<dyn CacheBackend> = cache.clone();

    backend.set("k", "v", 60).await.unwrap();
    assert_eq!(cache.get("k").await.unwrap(), Some("v".to_string()));
}
