//! Supported signing algorithms

use std::fmt;
use std::str::FromStr;

use crate::errors::TokenError;

/// Signing algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// HMAC with SHA-2
    Hmac,
    /// Keyed BLAKE2b
    KeyedHash,
    /// ECDSA over a NIST curve
    Ecdsa,
    /// RSASSA-PKCS1-v1_5
    Rsa,
    /// Ed25519
    EdDsa,
}

impl AlgorithmFamily {
    /// Whether signing and verification share one secret
    pub fn is_symmetric(&self) -> bool {
        matches!(self, AlgorithmFamily::Hmac | AlgorithmFamily::KeyedHash)
    }
}

/// Closed set of access token signing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Hs256,
    Hs384,
    Hs512,
    Blake2b,
    Es256,
    Es384,
    Es512,
    Rs256,
    Rs384,
    Rs512,
    EdDsa,
}

impl Algorithm {
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Hs256,
        Algorithm::Hs384,
        Algorithm::Hs512,
        Algorithm::Blake2b,
        Algorithm::Es256,
        Algorithm::Es384,
        Algorithm::Es512,
        Algorithm::Rs256,
        Algorithm::Rs384,
        Algorithm::Rs512,
        Algorithm::EdDsa,
    ];

    pub fn family(&self) -> AlgorithmFamily {
        match self {
            Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512 => AlgorithmFamily::Hmac,
            Algorithm::Blake2b => AlgorithmFamily::KeyedHash,
            Algorithm::Es256 | Algorithm::Es384 | Algorithm::Es512 => AlgorithmFamily::Ecdsa,
            Algorithm::Rs256 | Algorithm::Rs384 | Algorithm::Rs512 => AlgorithmFamily::Rsa,
            Algorithm::EdDsa => AlgorithmFamily::EdDsa,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.family().is_symmetric()
    }

    /// Minimum key size in bytes
    ///
    /// Secret length for symmetric algorithms, field size for ECDSA and
    /// Ed25519, modulus size for RSA.
    pub fn min_key_bytes(&self) -> usize {
        match self {
            Algorithm::Hs256 | Algorithm::Blake2b | Algorithm::Es256 | Algorithm::EdDsa => 32,
            Algorithm::Hs384 | Algorithm::Es384 => 48,
            Algorithm::Hs512 => 64,
            Algorithm::Es512 => 66,
            Algorithm::Rs256 | Algorithm::Rs384 | Algorithm::Rs512 => 256,
        }
    }

    /// Identifier written to the token header `alg`
    pub fn header_id(&self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
            Algorithm::Blake2b => "BLAKE2B",
            Algorithm::Es256 => "ES256",
            Algorithm::Es384 => "ES384",
            Algorithm::Es512 => "ES512",
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs384 => "RS384",
            Algorithm::Rs512 => "RS512",
            Algorithm::EdDsa => "EdDSA",
        }
    }

    /// Matching `jsonwebtoken` algorithm, if that crate implements it
    pub(crate) fn jwt_algorithm(&self) -> Option<jsonwebtoken::Algorithm> {
        use jsonwebtoken::Algorithm as Jwt;

        match self {
            Algorithm::Hs256 => Some(Jwt::HS256),
            Algorithm::Hs384 => Some(Jwt::HS384),
            Algorithm::Hs512 => Some(Jwt::HS512),
            Algorithm::Es256 => Some(Jwt::ES256),
            Algorithm::Es384 => Some(Jwt::ES384),
            Algorithm::Rs256 => Some(Jwt::RS256),
            Algorithm::Rs384 => Some(Jwt::RS384),
            Algorithm::Rs512 => Some(Jwt::RS512),
            Algorithm::EdDsa => Some(Jwt::EdDSA),
            Algorithm::Blake2b | Algorithm::Es512 => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_id())
    }
}

impl FromStr for Algorithm {
    type Err = TokenError;

    /// Parses an identifier case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HS256" => Ok(Algorithm::Hs256),
            "HS384" => Ok(Algorithm::Hs384),
            "HS512" => Ok(Algorithm::Hs512),
            "BLAKE2B" | "BLAKE2B-256" => Ok(Algorithm::Blake2b),
            "ES256" => Ok(Algorithm::Es256),
            "ES384" => Ok(Algorithm::Es384),
            "ES512" => Ok(Algorithm::Es512),
            "RS256" => Ok(Algorithm::Rs256),
            "RS384" => Ok(Algorithm::Rs384),
            "RS512" => Ok(Algorithm::Rs512),
            "EDDSA" => Ok(Algorithm::EdDsa),
            _ => Err(TokenError::UnsupportedAlgorithm {
                algorithm: s.to_string(),
            }),
        }
    }
}
