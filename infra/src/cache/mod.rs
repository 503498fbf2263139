//! Cache module for Redis-backed refresh token storage
//!
//! Connection management and retry live in [`RedisClient`]; [`RedisCache`]
//! adapts it to the core `CacheBackend` trait.

pub mod redis_cache;
pub mod redis_client;


pub use gk_shared::config::CacheConfig;
pub use redis_cache::RedisCache;
pub use redis_client::RedisClient;
