//! Refresh token module
//!
//! Opaque, revocable refresh tokens persisted through a [`CacheBackend`],
//! with optional single-session enforcement per subject.
//!
//! [`CacheBackend`]: crate::repositories::CacheBackend

mod store;


pub use store::{RefreshTokenStore, MIN_TOKEN_LENGTH};
