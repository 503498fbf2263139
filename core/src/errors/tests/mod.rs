//! Unit tests for token error types

use gk_shared::errors::{ErrorResponse, IntoErrorResponse};

use crate::errors::{CacheError, TokenError};

#[test]
fn test_each_rejection_has_distinct_code() {
    let errors = [
        TokenError::malformed("bad"),
        TokenError::InvalidSignature,
        TokenError::TokenExpired { subject: None },
        TokenError::TokenNotYetValid { subject: None },
        TokenError::IssuerMismatch { subject: None },
        TokenError::AudienceMismatch { subject: None },
        TokenError::InvalidRefreshToken,
    ];

    let mut codes: Vec<&str> = errors.iter().map(TokenError::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
    assert!(errors.iter().all(TokenError::is_rejection));
}

#[test]
fn test_configuration_errors_are_not_rejections() {
    assert!(!TokenError::config("short key").is_rejection());
    assert!(!TokenError::UnsupportedAlgorithm {
        algorithm: "none".to_string()
    }
    .is_rejection());
    assert!(!TokenError::from(CacheError::Unavailable("down".to_string())).is_rejection());
}

#[test]
fn test_subject_only_on_claim_failures() {
    let expired = TokenError::TokenExpired {
        subject: Some("user-123".to_string()),
    };
    assert_eq!(expired.subject(), Some("user-123"));
    assert_eq!(TokenError::InvalidSignature.subject(), None);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TokenError::malformed("expected 3 segments").to_string(),
        "Failed to parse access token: expected 3 segments"
    );
    assert_eq!(
        TokenError::IssuerMismatch { subject: None }.to_string(),
        "Invalid access token issuer"
    );
    assert_eq!(
        CacheError::operation("set", "connection reset").to_string(),
        "Cache operation 'set' failed: connection reset"
    );
}

#[test]
fn test_token_error_conversion() {
    let response: ErrorResponse = TokenError::TokenExpired {
        subject: Some("user-123".to_string()),
    }
    .into();
    assert_eq!(response.error, "TOKEN_EXPIRED");
    assert_eq!(response.message, "Access token is expired");
    // The trusted subject is for audit logs, never for the client
    assert!(response.details.is_none());

    let response = TokenError::AudienceMismatch { subject: None }.to_error_response();
    assert_eq!(response.error, "AUDIENCE_MISMATCH");
}
