//! # Gatekeep Infrastructure
//!
//! Concrete backends for the token lifecycle core:
//! - **Cache**: Redis client with retry and a `CacheBackend` over it
//! - **Factory**: builds the token services from `AuthConfig`

use gk_core::errors::TokenError;

/// Cache module - Redis client and the refresh token backend
pub mod cache;

/// Service construction from configuration
pub mod factory;

pub use cache::{RedisCache, RedisClient};
pub use factory::{build_in_memory_session_service, build_session_service};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token service construction error
    #[error(transparent)]
    Token(#[from] TokenError),
}
