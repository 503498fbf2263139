//! Access token module
//!
//! - Algorithm selection and key material validation
//! - Compact token encoding, decoding and signature verification
//! - Temporal, issuer and audience claim checks
//! - Access token issuance and parsing

mod algorithm;
mod codec;
mod config;
mod key_material;
mod service;
mod validator;


pub use algorithm::{Algorithm, AlgorithmFamily};
pub use codec::{DecodedToken, TokenCodec, TokenHeader};
pub use config::AccessTokenServiceConfig;
pub use key_material::KeyMaterial;
pub use service::AccessTokenService;
pub use validator::{ClaimValidator, ValidationPolicy};
