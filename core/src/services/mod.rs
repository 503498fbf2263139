//! Token lifecycle services.

pub mod refresh;
pub mod session;
pub mod token;

pub use refresh::RefreshTokenStore;
pub use session::SessionTokenService;
pub use token::{
    AccessTokenService, AccessTokenServiceConfig, Algorithm, AlgorithmFamily, ClaimValidator,
    DecodedToken, KeyMaterial, TokenCodec, TokenHeader, ValidationPolicy,
};
