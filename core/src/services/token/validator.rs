//! Temporal and binding checks over verified claims

use crate::domain::entities::ClaimSet;
use crate::errors::{TokenError, TokenResult};

/// Expected issuer, audience and tolerated clock skew
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub issuer: String,
    pub audience: String,

    /// Seconds of skew tolerated on `exp` and `nbf`
    pub leeway: i64,
}

impl ValidationPolicy {
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            leeway: 0,
        }
    }

    pub fn with_leeway(mut self, leeway: i64) -> Self {
        self.leeway = leeway;
        self
    }
}

/// Validates claim sets against a [`ValidationPolicy`]
///
/// Each check is independent and takes the clock explicitly where it needs
/// one. Errors carry the token subject, which is trusted once the signature
/// has been verified.
#[derive(Debug, Clone)]
pub struct ClaimValidator {
    policy: ValidationPolicy,
}

impl ClaimValidator {
    /// Fails with `InvalidConfiguration` on a negative leeway
    pub fn new(policy: ValidationPolicy) -> TokenResult<Self> {
        if policy.leeway < 0 {
            return Err(TokenError::config(format!(
                "Leeway must not be negative, got {}",
                policy.leeway
            )));
        }
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// `TokenExpired` when `now > exp + leeway` or `exp` is missing;
    /// `TokenNotYetValid` when `now < nbf - leeway`
    pub fn check_time(&self, claims: &ClaimSet, now: i64) -> TokenResult<()> {
        let leeway = self.policy.leeway;

        match claims.expires_at() {
            Some(exp) if now <= exp.saturating_add(leeway) => {}
            _ => {
                return Err(TokenError::TokenExpired {
                    subject: subject_of(claims),
                })
            }
        }

        if let Some(nbf) = claims.not_before() {
            if now < nbf.saturating_sub(leeway) {
                return Err(TokenError::TokenNotYetValid {
                    subject: subject_of(claims),
                });
            }
        }

        Ok(())
    }

    pub fn check_issuer(&self, claims: &ClaimSet) -> TokenResult<()> {
        if claims.issuer() == Some(self.policy.issuer.as_str()) {
            return Ok(());
        }
        Err(TokenError::IssuerMismatch {
            subject: subject_of(claims),
        })
    }

    /// Accepts `aud` as a string equal to the policy audience or an array
    /// containing it
    pub fn check_audience(&self, claims: &ClaimSet) -> TokenResult<()> {
        let expected = self.policy.audience.as_str();
        let permitted = match claims.audience() {
            Some(serde_json::Value::String(aud)) => aud == expected,
            Some(serde_json::Value::Array(auds)) => {
                auds.iter().any(|aud| aud.as_str() == Some(expected))
            }
            _ => false,
        };

        if permitted {
            return Ok(());
        }
        Err(TokenError::AudienceMismatch {
            subject: subject_of(claims),
        })
    }

    /// Time, then issuer, then audience; the first failure is returned
    pub fn validate(&self, claims: &ClaimSet, now: i64) -> TokenResult<()> {
        self.check_time(claims, now)?;
        self.check_issuer(claims)?;
        self.check_audience(claims)
    }
}

fn subject_of(claims: &ClaimSet) -> Option<String> {
    claims.subject().map(str::to_string)
}
