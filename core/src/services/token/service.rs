//! Access token issuance and parsing

use chrono::Utc;
use gk_shared::config::AccessTokenConfig;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::entities::{
    custom_claims, is_registered_claim, AccessToken, ClaimSet, PrincipalToken, ValidatedUser,
};
use crate::errors::{TokenError, TokenResult};

use super::algorithm::Algorithm;
use super::codec::TokenCodec;
use super::config::AccessTokenServiceConfig;
use super::key_material::KeyMaterial;
use super::validator::ClaimValidator;

const TOKEN_ID_BYTES: usize = 16;

/// Issues signed access tokens and parses them back into a principal view
#[derive(Debug)]
pub struct AccessTokenService {
    codec: TokenCodec,
    validator: ClaimValidator,
    config: AccessTokenServiceConfig,
}

impl AccessTokenService {
    /// Creates a new access token service
    ///
    /// # Arguments
    ///
    /// * `key` - Signing (or verification-only) key material
    /// * `config` - TTL, issuer, audience and leeway
    ///
    /// # Returns
    ///
    /// * `Ok(AccessTokenService)` - Service ready
    /// * `Err(TokenError::InvalidConfiguration)` - Negative leeway
    pub fn new(key: KeyMaterial, config: AccessTokenServiceConfig) -> TokenResult<Self> {
        let validator = ClaimValidator::new(config.validation_policy())?;

        tracing::info!(
            algorithm = %key.algorithm(),
            issuer = %config.issuer,
            audience = %config.audience,
            ttl_seconds = config.ttl_seconds,
            can_sign = key.can_sign(),
            "Access token service initialized"
        );

        Ok(Self {
            codec: TokenCodec::new(key),
            validator,
            config,
        })
    }

    /// Creates the service, loading key material as configured
    pub fn from_config(config: &AccessTokenConfig) -> TokenResult<Self> {
        let key = KeyMaterial::from_config(config)?;
        Self::new(key, AccessTokenServiceConfig::from(config))
    }

    pub fn algorithm(&self) -> Algorithm {
        self.codec.key().algorithm()
    }

    pub fn config(&self) -> &AccessTokenServiceConfig {
        &self.config
    }

    pub fn validator(&self) -> &ClaimValidator {
        &self.validator
    }

    /// Issues an access token for `principal`
    ///
    /// The returned `expires_in` is the configured TTL.
    pub fn issue(&self, principal: &PrincipalToken) -> TokenResult<AccessToken> {
        self.issue_at(principal, Utc::now().timestamp())
    }

    /// Issues an access token as if the clock read `now`
    pub fn issue_at(&self, principal: &PrincipalToken, now: i64) -> TokenResult<AccessToken> {
        let mut claims = ClaimSet::new();

        if self.config.embed_attributes {
            for (name, value) in &principal.attributes {
                if !is_registered_claim(name) {
                    claims.insert(name.clone(), value.clone());
                }
            }
        }

        claims.insert("iss", self.config.issuer.clone());
        claims.insert("aud", self.config.audience.clone());
        claims.insert("sub", principal.user_identifier.clone());
        claims.insert("iat", now);
        claims.insert("nbf", now);
        claims.insert("exp", now.saturating_add(self.config.ttl_seconds));
        claims.insert("jti", generate_token_id());

        let token = self.codec.encode(&claims)?;

        tracing::debug!(
            subject = %principal.user_identifier,
            algorithm = %self.algorithm(),
            expires_in = self.config.ttl_seconds,
            "Issued access token"
        );

        Ok(AccessToken {
            token,
            expires_in: self.config.ttl_seconds,
        })
    }

    /// Validates `token` and returns its subject and custom claims
    ///
    /// # Returns
    ///
    /// * `Ok(ValidatedUser)` - Token is authentic and currently valid
    /// * `Err(TokenError::MalformedToken)` - Not a parseable token, or no `sub`
    /// * `Err(TokenError::InvalidSignature)` - Wrong key or tampered
    /// * `Err(TokenError::TokenExpired | TokenNotYetValid | IssuerMismatch |
    ///   AudienceMismatch)` - Authentic but rejected by policy
    pub fn parse(&self, token: &str) -> TokenResult<ValidatedUser> {
        self.parse_at(token, Utc::now().timestamp())
    }

    /// Validates `token` as if the clock read `now`
    pub fn parse_at(&self, token: &str, now: i64) -> TokenResult<ValidatedUser> {
        let decoded = TokenCodec::decode(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed access token");
            e
        })?;

        if let Err(e) = self.codec.verify(&decoded) {
            tracing::warn!(header_alg = %decoded.header.alg, "Rejected access token signature");
            return Err(e);
        }

        if let Err(e) = self.validator.validate(&decoded.claims, now) {
            tracing::warn!(
                subject = e.subject().unwrap_or("-"),
                code = e.code(),
                "Rejected access token claims"
            );
            return Err(e);
        }

        let identifier = decoded
            .claims
            .subject()
            .map(str::to_string)
            .ok_or_else(|| TokenError::malformed("missing subject claim"))?;

        Ok(ValidatedUser {
            identifier,
            attributes: custom_claims(&decoded.claims),
        })
    }
}

fn generate_token_id() -> String {
    let mut bytes = [0u8; TOKEN_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
