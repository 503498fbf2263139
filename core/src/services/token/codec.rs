//! Compact token serialization: `header.payload.signature`, each base64url
//! without padding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::claims::TEMPORAL_CLAIMS;
use crate::domain::entities::ClaimSet;
use crate::errors::{TokenError, TokenResult};

use super::algorithm::Algorithm;
use super::key_material::KeyMaterial;

const TOKEN_TYPE: &str = "JWT";

/// Token header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

/// Structurally valid token whose signature has not been checked
#[derive(Debug, Clone)]
pub struct DecodedToken {
    pub header: TokenHeader,

    /// Algorithm named by the header
    pub algorithm: Algorithm,

    pub claims: ClaimSet,

    signing_input: String,
    signature: Vec<u8>,
}

impl DecodedToken {
    /// `header.payload` exactly as received
    pub fn signing_input(&self) -> &str {
        &self.signing_input
    }
}

/// Encodes and verifies tokens with one key
#[derive(Debug)]
pub struct TokenCodec {
    key: KeyMaterial,
}

impl TokenCodec {
    pub fn new(key: KeyMaterial) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    /// Serializes and signs `claims`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Compact token
    /// * `Err(TokenError::InvalidConfiguration)` - Key is verification-only
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing backend failure
    pub fn encode(&self, claims: &ClaimSet) -> TokenResult<String> {
        let header = TokenHeader {
            alg: self.key.algorithm().header_id().to_string(),
            typ: Some(TOKEN_TYPE.to_string()),
        };

        let header_json = serde_json::to_vec(&header).map_err(generation_failed)?;
        let payload_json = serde_json::to_vec(claims).map_err(generation_failed)?;

        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(payload_json)
        );
        let signature = self.key.sign(signing_input.as_bytes())?;

        Ok(format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(signature)))
    }

    /// Splits and decodes a token without any cryptographic or time check
    ///
    /// Fails with `MalformedToken` unless the input is three non-empty
    /// base64url segments, the header names a known algorithm, and the
    /// payload is a JSON object whose `iat`/`exp`/`nbf` are integers.
    pub fn decode(token: &str) -> TokenResult<DecodedToken> {
        let mut segments = token.split('.');
        let (header_b64, payload_b64, signature_b64) =
            match (segments.next(), segments.next(), segments.next(), segments.next()) {
                (Some(h), Some(p), Some(s), None) if !h.is_empty() && !p.is_empty() && !s.is_empty() => {
                    (h, p, s)
                }
                _ => return Err(TokenError::malformed("expected three non-empty segments")),
            };

        let header_bytes = decode_segment(header_b64, "header")?;
        let header: TokenHeader = serde_json::from_slice(&header_bytes)
            .map_err(|e| TokenError::malformed(format!("invalid header: {}", e)))?;
        let algorithm: Algorithm = header
            .alg
            .parse()
            .map_err(|_| TokenError::malformed(format!("unrecognized algorithm '{}'", header.alg)))?;

        let payload_bytes = decode_segment(payload_b64, "payload")?;
        let payload: Value = serde_json::from_slice(&payload_bytes)
            .map_err(|e| TokenError::malformed(format!("invalid payload: {}", e)))?;
        let claims = match payload {
            Value::Object(map) => ClaimSet::from(map),
            _ => return Err(TokenError::malformed("payload is not a JSON object")),
        };
        for name in TEMPORAL_CLAIMS {
            if let Some(value) = claims.get(name) {
                if value.as_i64().is_none() {
                    return Err(TokenError::malformed(format!(
                        "claim '{}' is not an integer timestamp",
                        name
                    )));
                }
            }
        }

        let signature = decode_segment(signature_b64, "signature")?;

        Ok(DecodedToken {
            header,
            algorithm,
            claims,
            signing_input: format!("{}.{}", header_b64, payload_b64),
            signature,
        })
    }

    /// Checks the header algorithm and signature against this codec's key
    pub fn verify(&self, token: &DecodedToken) -> TokenResult<()> {
        if token.algorithm != self.key.algorithm() {
            return Err(TokenError::InvalidSignature);
        }
        if !self
            .key
            .verify(token.signing_input.as_bytes(), &token.signature)
        {
            return Err(TokenError::InvalidSignature);
        }
        Ok(())
    }

    /// Decodes then verifies
    pub fn decode_verified(&self, token: &str) -> TokenResult<DecodedToken> {
        let decoded = Self::decode(token)?;
        self.verify(&decoded)?;
        Ok(decoded)
    }
}

fn decode_segment(segment: &str, name: &str) -> TokenResult<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::malformed(format!("{} is not base64url: {}", name, e)))
}

fn generation_failed(e: serde_json::Error) -> TokenError {
    TokenError::TokenGenerationFailed {
        message: e.to_string(),
    }
}
