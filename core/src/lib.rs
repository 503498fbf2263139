//! # Gatekeep Core
//!
//! Token lifecycle for an authentication layer: signed access tokens over a
//! closed set of algorithms, claim validation, and revocable refresh tokens
//! stored behind a pluggable cache backend.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use domain::entities::{
    AccessToken, ClaimSet, PrincipalToken, RefreshToken, TokenPair, ValidatedUser,
};
pub use errors::{CacheError, TokenError, TokenResult};
pub use repositories::{CacheBackend, InMemoryCache};
pub use services::{
    AccessTokenService, AccessTokenServiceConfig, Algorithm, KeyMaterial, RefreshTokenStore,
    SessionTokenService,
};
