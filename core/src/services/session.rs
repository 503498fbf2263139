//! Login, refresh and logout flow over the access and refresh token services

use crate::domain::entities::{mask_token, PrincipalToken, TokenPair, ValidatedUser};
use crate::errors::{TokenError, TokenResult};
use crate::repositories::CacheBackend;

use super::refresh::RefreshTokenStore;
use super::token::AccessTokenService;

/// Issues token pairs and rotates them on refresh
pub struct SessionTokenService<C: CacheBackend> {
    access_tokens: AccessTokenService,
    refresh_tokens: RefreshTokenStore<C>,
}

impl<C: CacheBackend> std::fmt::Debug for SessionTokenService<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("access_tokens", &self.access_tokens)
            .field("refresh_tokens", &self.refresh_tokens)
            .finish()
    }
}

impl<C: CacheBackend> SessionTokenService<C> {
    pub fn new(access_tokens: AccessTokenService, refresh_tokens: RefreshTokenStore<C>) -> Self {
        Self {
            access_tokens,
            refresh_tokens,
        }
    }

    pub fn access_tokens(&self) -> &AccessTokenService {
        &self.access_tokens
    }

    pub fn refresh_tokens(&self) -> &RefreshTokenStore<C> {
        &self.refresh_tokens
    }

    /// Issues an access token and a refresh token for a freshly
    /// authenticated principal
    pub async fn login(&self, principal: &PrincipalToken) -> TokenResult<TokenPair> {
        let access = self.access_tokens.issue(principal)?;
        let refresh = self.refresh_tokens.issue(principal).await?;

        tracing::info!(
            subject = %principal.user_identifier,
            guard = %principal.guard_name,
            "Issued token pair"
        );

        Ok(TokenPair::new(access, refresh))
    }

    /// Exchanges a refresh token for a new token pair
    ///
    /// The presented token is revoked before the new pair is issued.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New pair for the principal behind the token
    /// * `Err(TokenError::InvalidRefreshToken)` - Unknown, expired or revoked
    /// * `Err(TokenError::Cache)` - Backend failure
    pub async fn refresh(&self, refresh_token: &str) -> TokenResult<TokenPair> {
        let Some(principal) = self.refresh_tokens.resolve(refresh_token).await? else {
            tracing::warn!(token = %mask_token(refresh_token), "Rejected refresh token");
            return Err(TokenError::InvalidRefreshToken);
        };

        self.refresh_tokens.revoke(refresh_token).await?;
        self.login(&principal).await
    }

    /// Revokes a refresh token; unknown tokens are ignored
    pub async fn logout(&self, refresh_token: &str) -> TokenResult<()> {
        self.refresh_tokens.revoke(refresh_token).await
    }

    /// Validates a bearer access token
    pub fn authenticate(&self, access_token: &str) -> TokenResult<ValidatedUser> {
        self.access_tokens.parse(access_token)
    }
}
