//! End-to-end token lifecycle: login, authenticate, refresh and logout
//! against the in-memory cache backend.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use gk_core::domain::entities::PrincipalToken;
use gk_core::errors::TokenError;
use gk_core::repositories::InMemoryCache;
use gk_core::services::{
    AccessTokenService, AccessTokenServiceConfig, Algorithm, KeyMaterial, RefreshTokenStore,
    SessionTokenService,
};
use gk_shared::config::{AccessTokenConfig, RefreshTokenConfig};

const ES512_PRIVATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/es512_private.pem"));
const ES512_PUBLIC: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/es512_public.pem"));
const ED25519_PRIVATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ed25519_private.pem"));
const ED25519_PUBLIC: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ed25519_public.pem"));

fn principal() -> PrincipalToken {
    PrincipalToken::new("api", "user-1").with_attribute("email", "user-1@example.com")
}

fn access_service(config: AccessTokenServiceConfig) -> AccessTokenService {
    let key = KeyMaterial::asymmetric(Algorithm::Es512, ES512_PRIVATE, ES512_PUBLIC, None).unwrap();
    AccessTokenService::new(key, config).unwrap()
}

fn session_service(single_session: bool) -> SessionTokenService<InMemoryCache> {
    let refresh = RefreshTokenStore::new(
        InMemoryCache::new(),
        &RefreshTokenConfig::default().with_single_session(single_session),
    )
    .unwrap();
    SessionTokenService::new(
        access_service(AccessTokenServiceConfig::new("gatekeep", "web", 600)),
        refresh,
    )
}

#[tokio::test]
async fn test_login_then_authenticate() {
    let service = session_service(false);
    let pair = service.login(&principal()).await.unwrap();

    assert_eq!(pair.expires_in, 600);
    assert_eq!(pair.refresh_token.len(), 64);

    let user = service.authenticate(&pair.access_token).unwrap();
    assert_eq!(user.identifier, "user-1");
    assert!(user.attributes.is_empty());

    let resolved = service.refresh_tokens().resolve(&pair.refresh_token).await.unwrap();
    assert_eq!(resolved, Some(principal()));
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    let service = session_service(false);
    let first = service.login(&principal()).await.unwrap();
    let second = service.refresh(&first.refresh_token).await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(service.authenticate(&second.access_token).unwrap().identifier, "user-1");

    // The presented refresh token is single use
    let err = service.refresh(&first.refresh_token).await.unwrap_err();
    assert_eq!(err, TokenError::InvalidRefreshToken);
    assert!(service.refresh(&second.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_refresh_with_unknown_token() {
    let service = session_service(true);
    let err = service.refresh("00112233445566778899aabbccddeeff").await.unwrap_err();
    assert_eq!(err, TokenError::InvalidRefreshToken);
    assert_eq!(err.code(), "INVALID_REFRESH_TOKEN");
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let service = session_service(true);
    let pair = service.login(&principal()).await.unwrap();

    service.logout(&pair.refresh_token).await.unwrap();
    service.logout(&pair.refresh_token).await.unwrap();

    assert!(matches!(
        service.refresh(&pair.refresh_token).await,
        Err(TokenError::InvalidRefreshToken)
    ));
    assert_eq!(service.refresh_tokens().current_token("user-1").await.unwrap(), None);
}

#[tokio::test]
async fn test_single_session_login_invalidates_previous_session() {
    let service = session_service(true);
    let first = service.login(&principal()).await.unwrap();
    let second = service.login(&principal()).await.unwrap();

    assert!(matches!(
        service.refresh(&first.refresh_token).await,
        Err(TokenError::InvalidRefreshToken)
    ));
    let third = service.refresh(&second.refresh_token).await.unwrap();
    assert_eq!(
        service.refresh_tokens().current_token("user-1").await.unwrap(),
        Some(third.refresh_token)
    );
}

#[tokio::test]
async fn test_multi_session_logins_are_independent() {
    let service = session_service(false);
    let phone = service.login(&principal()).await.unwrap();
    let laptop = service.login(&principal()).await.unwrap();

    service.logout(&phone.refresh_token).await.unwrap();
    assert!(service.refresh(&laptop.refresh_token).await.is_ok());
}

#[tokio::test]
async fn test_embedded_attributes_survive_refresh() {
    let refresh =
        RefreshTokenStore::new(InMemoryCache::new(), &RefreshTokenConfig::default()).unwrap();
    let access = access_service(
        AccessTokenServiceConfig::new("gatekeep", "web", 600).with_embedded_attributes(true),
    );
    let service = SessionTokenService::new(access, refresh);

    let first = service.login(&principal()).await.unwrap();
    let second = service.refresh(&first.refresh_token).await.unwrap();

    let user = service.authenticate(&second.access_token).unwrap();
    assert_eq!(user.attributes["email"], "user-1@example.com");
}

#[tokio::test]
async fn test_separate_issuer_and_verifier() {
    let config = AccessTokenServiceConfig::new("gatekeep", "web", 600);
    let issuer = AccessTokenService::new(
        KeyMaterial::asymmetric(Algorithm::EdDsa, ED25519_PRIVATE, ED25519_PUBLIC, None).unwrap(),
        config.clone(),
    )
    .unwrap();
    let verifier = AccessTokenService::new(
        KeyMaterial::verifier(Algorithm::EdDsa, ED25519_PUBLIC).unwrap(),
        config,
    )
    .unwrap();

    let access = issuer.issue(&principal()).unwrap();
    assert_eq!(verifier.parse(&access.token).unwrap().identifier, "user-1");
}

#[tokio::test]
async fn test_access_token_rejections() {
    let service = session_service(false);

    assert!(matches!(
        service.authenticate("not-a-jwt"),
        Err(TokenError::MalformedToken { .. })
    ));

    let other_audience = access_service(AccessTokenServiceConfig::new("gatekeep", "mobile", 600));
    let token = other_audience.issue(&principal()).unwrap().token;
    assert!(matches!(
        service.authenticate(&token),
        Err(TokenError::AudienceMismatch { .. })
    ));

    let other_issuer = access_service(AccessTokenServiceConfig::new("elsewhere", "web", 600));
    let token = other_issuer.issue(&principal()).unwrap().token;
    assert!(matches!(
        service.authenticate(&token),
        Err(TokenError::IssuerMismatch { .. })
    ));

    let expired = access_service(AccessTokenServiceConfig::new("gatekeep", "web", -10));
    let token = expired.issue(&principal()).unwrap().token;
    assert!(matches!(
        service.authenticate(&token),
        Err(TokenError::TokenExpired { .. })
    ));
}

#[tokio::test]
async fn test_symmetric_round_trip_from_config() {
    for algorithm in ["HS256", "HS384", "HS512", "BLAKE2B-256"] {
        let config = AccessTokenConfig::with_secret(algorithm, STANDARD.encode([42u8; 64]))
            .with_binding("gatekeep", "web");
        let service = AccessTokenService::from_config(&config).unwrap();

        let token = service.issue(&principal()).unwrap().token;
        assert_eq!(service.parse(&token).unwrap().identifier, "user-1", "{algorithm}");
    }
}

#[tokio::test]
async fn test_symmetric_secret_mismatch() {
    let issue = AccessTokenService::from_config(&AccessTokenConfig::with_secret(
        "HS256",
        STANDARD.encode([1u8; 32]),
    ))
    .unwrap();
    let parse = AccessTokenService::from_config(&AccessTokenConfig::with_secret(
        "HS256",
        STANDARD.encode([2u8; 32]),
    ))
    .unwrap();

    let token = issue.issue(&principal()).unwrap().token;
    assert_eq!(parse.parse(&token).unwrap_err(), TokenError::InvalidSignature);
}
