//! Shared configuration and common types for Gatekeep
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types for access tokens, refresh tokens and the cache
//! - Logging bootstrap
//! - The error response envelope returned to clients

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used items at crate root
pub use config::{
    AccessTokenConfig, AuthConfig, CacheConfig, Environment, LogFormat, LoggingConfig,
    RefreshTokenConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use logging::init_tracing;
