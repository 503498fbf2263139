//! Token lifecycle error taxonomy
//!
//! Every rejection reason is a distinct variant so callers can branch on the
//! kind rather than on message text. Configuration errors surface at
//! construction; everything else is recoverable by the caller.

use gk_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Token issuance, parsing and storage errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Failed to parse access token: {reason}")]
    MalformedToken { reason: String },

    #[error("Invalid access token signature")]
    InvalidSignature,

    /// `subject` is the `sub` claim of a token whose signature already verified
    #[error("Access token is expired")]
    TokenExpired { subject: Option<String> },

    #[error("Access token is not yet valid")]
    TokenNotYetValid { subject: Option<String> },

    #[error("Invalid access token issuer")]
    IssuerMismatch { subject: Option<String> },

    #[error("Access token not permitted for this audience")]
    AudienceMismatch { subject: Option<String> },

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed: {message}")]
    TokenGenerationFailed { message: String },

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl TokenError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TokenError::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        TokenError::MalformedToken {
            reason: reason.into(),
        }
    }

    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::UnsupportedAlgorithm { .. } => error_codes::UNSUPPORTED_ALGORITHM,
            TokenError::InvalidConfiguration { .. } => error_codes::INVALID_CONFIGURATION,
            TokenError::MalformedToken { .. } => error_codes::MALFORMED_TOKEN,
            TokenError::InvalidSignature => error_codes::INVALID_SIGNATURE,
            TokenError::TokenExpired { .. } => error_codes::TOKEN_EXPIRED,
            TokenError::TokenNotYetValid { .. } => error_codes::TOKEN_NOT_YET_VALID,
            TokenError::IssuerMismatch { .. } => error_codes::ISSUER_MISMATCH,
            TokenError::AudienceMismatch { .. } => error_codes::AUDIENCE_MISMATCH,
            TokenError::InvalidRefreshToken => error_codes::INVALID_REFRESH_TOKEN,
            TokenError::TokenGenerationFailed { .. } => error_codes::TOKEN_GENERATION_FAILED,
            TokenError::Cache(_) => error_codes::CACHE_ERROR,
        }
    }

    /// Subject of a signature-verified token that failed claim validation
    pub fn subject(&self) -> Option<&str> {
        match self {
            TokenError::TokenExpired { subject }
            | TokenError::TokenNotYetValid { subject }
            | TokenError::IssuerMismatch { subject }
            | TokenError::AudienceMismatch { subject } => subject.as_deref(),
            _ => None,
        }
    }

    /// Whether the error rejects a presented token, as opposed to a
    /// misconfiguration or backend failure
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::MalformedToken { .. }
                | TokenError::InvalidSignature
                | TokenError::TokenExpired { .. }
                | TokenError::TokenNotYetValid { .. }
                | TokenError::IssuerMismatch { .. }
                | TokenError::AudienceMismatch { .. }
                | TokenError::InvalidRefreshToken
        )
    }
}

/// Cache backend transport errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("Cache operation '{operation}' failed: {message}")]
    Operation { operation: String, message: String },
}

impl CacheError {
    pub fn operation(operation: impl Into<String>, message: impl ToString) -> Self {
        CacheError::Operation {
            operation: operation.into(),
            message: message.to_string(),
        }
    }
}

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.to_string())
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        err.to_error_response()
    }
}
