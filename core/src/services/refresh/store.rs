//! Cache-backed refresh token store

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use gk_shared::config::RefreshTokenConfig;
use rand::rngs::OsRng;
use rand::RngCore;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::entities::{mask_token, PrincipalToken, RefreshToken};
use crate::errors::{TokenError, TokenResult};
use crate::repositories::CacheBackend;

/// Minimum refresh token length in hex characters
pub const MIN_TOKEN_LENGTH: usize = 16;

const ISSUE_LOCK_STRIPES: usize = 64;

/// Issues opaque refresh tokens and maps them back to their principal
///
/// Keys:
/// - `<namespace>:refresh:<token>` holds the principal as JSON
/// - `<namespace>:subject:<user_identifier>` holds the latest token
///   (single-session mode only)
///
/// In single-session mode, issuance and revocation for one subject are
/// serialized within this process. Concurrent writers in other processes
/// sharing the cache are not coordinated.
pub struct RefreshTokenStore<C: CacheBackend> {
    cache: C,
    namespace: String,
    ttl_seconds: i64,
    length: usize,
    single_session: bool,
    subject_locks: Vec<Mutex<()>>,
}

impl<C: CacheBackend> std::fmt::Debug for RefreshTokenStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenStore")
            .field("namespace", &self.namespace)
            .field("ttl_seconds", &self.ttl_seconds)
            .field("length", &self.length)
            .field("single_session", &self.single_session)
            .finish()
    }
}

impl<C: CacheBackend> RefreshTokenStore<C> {
    /// Creates a new refresh token store
    ///
    /// # Arguments
    ///
    /// * `cache` - Backend holding the token entries
    /// * `config` - Prefix, TTL, token length and single-session flag
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshTokenStore)` - Store ready
    /// * `Err(TokenError::InvalidConfiguration)` - Odd or short token length,
    ///   or non-positive TTL
    pub fn new(cache: C, config: &RefreshTokenConfig) -> TokenResult<Self> {
        if config.length < MIN_TOKEN_LENGTH || config.length % 2 != 0 {
            return Err(TokenError::config(format!(
                "Refresh token length must be even and at least {}, got {}",
                MIN_TOKEN_LENGTH, config.length
            )));
        }
        if config.ttl_seconds <= 0 {
            return Err(TokenError::config(format!(
                "Refresh token TTL must be positive, got {}",
                config.ttl_seconds
            )));
        }

        let namespace = config.namespace();
        tracing::info!(
            namespace = %namespace,
            ttl_seconds = config.ttl_seconds,
            length = config.length,
            single_session = config.single_session,
            "Refresh token store initialized"
        );

        Ok(Self {
            cache,
            namespace,
            ttl_seconds: config.ttl_seconds,
            length: config.length,
            single_session: config.single_session,
            subject_locks: (0..ISSUE_LOCK_STRIPES).map(|_| Mutex::new(())).collect(),
        })
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub fn is_single_session(&self) -> bool {
        self.single_session
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Cache key of the entry backing `token`
    pub fn refresh_key(&self, token: &str) -> String {
        format!("{}:refresh:{}", self.namespace, token)
    }

    /// Cache key of the subject mapping for `user_identifier`
    pub fn subject_key(&self, user_identifier: &str) -> String {
        format!("{}:subject:{}", self.namespace, user_identifier)
    }

    /// Issues a refresh token for `principal`
    ///
    /// In single-session mode the subject's previous token is revoked first.
    /// Failing to delete the previous entry is logged and does not fail
    /// issuance.
    pub async fn issue(&self, principal: &PrincipalToken) -> TokenResult<RefreshToken> {
        let token = self.generate_token();
        let record = serde_json::to_string(principal).map_err(|e| {
            TokenError::TokenGenerationFailed {
                message: format!("Failed to serialize principal: {}", e),
            }
        })?;
        let ttl = self.ttl_seconds as u64;

        if self.single_session {
            let _guard = self.lock_subject(&principal.user_identifier).await;
            let subject_key = self.subject_key(&principal.user_identifier);

            if let Some(previous) = self.cache.get(&subject_key).await? {
                match self.cache.delete(&self.refresh_key(&previous)).await {
                    Ok(()) => tracing::debug!(
                        subject = %principal.user_identifier,
                        previous = %mask_token(&previous),
                        "Revoked previous refresh token"
                    ),
                    Err(e) => tracing::warn!(
                        subject = %principal.user_identifier,
                        previous = %mask_token(&previous),
                        error = %e,
                        "Failed to revoke previous refresh token"
                    ),
                }
            }

            self.cache.set(&self.refresh_key(&token), &record, ttl).await?;
            self.cache.set(&subject_key, &token, ttl).await?;
        } else {
            self.cache.set(&self.refresh_key(&token), &record, ttl).await?;
        }

        tracing::debug!(
            subject = %principal.user_identifier,
            token = %mask_token(&token),
            expires_in = self.ttl_seconds,
            "Issued refresh token"
        );

        Ok(RefreshToken {
            token,
            expires_in: self.ttl_seconds,
        })
    }

    /// Looks up the principal behind `token`
    ///
    /// # Returns
    ///
    /// * `Ok(Some(PrincipalToken))` - Token is live
    /// * `Ok(None)` - Unknown, expired, revoked or unreadable
    /// * `Err(TokenError::Cache)` - Backend failure
    pub async fn resolve(&self, token: &str) -> TokenResult<Option<PrincipalToken>> {
        if !is_well_formed(token) {
            tracing::debug!("Refresh token is not a hex string");
            return Ok(None);
        }

        let Some(record) = self.cache.get(&self.refresh_key(token)).await? else {
            tracing::debug!(token = %mask_token(token), "Refresh token not found");
            return Ok(None);
        };

        match serde_json::from_str::<PrincipalToken>(&record) {
            Ok(principal) => Ok(Some(principal)),
            Err(e) => {
                tracing::warn!(
                    token = %mask_token(token),
                    error = %e,
                    "Discarding unreadable refresh token record"
                );
                Ok(None)
            }
        }
    }

    /// Revokes `token`; unknown or already revoked tokens are a no-op
    ///
    /// In single-session mode the subject mapping is removed only while it
    /// still points at `token`.
    pub async fn revoke(&self, token: &str) -> TokenResult<()> {
        if self.single_session {
            if let Some(principal) = self.resolve(token).await? {
                let _guard = self.lock_subject(&principal.user_identifier).await;
                let subject_key = self.subject_key(&principal.user_identifier);

                if self.cache.get(&subject_key).await?.as_deref() == Some(token) {
                    self.cache.delete(&subject_key).await?;
                }
            }
        }

        self.cache.delete(&self.refresh_key(token)).await?;
        tracing::debug!(token = %mask_token(token), "Revoked refresh token");

        Ok(())
    }

    /// Token currently mapped to `user_identifier` in single-session mode
    pub async fn current_token(&self, user_identifier: &str) -> TokenResult<Option<String>> {
        if !self.single_session {
            return Ok(None);
        }
        Ok(self.cache.get(&self.subject_key(user_identifier)).await?)
    }

    fn generate_token(&self) -> String {
        let mut bytes = vec![0u8; self.length / 2];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    async fn lock_subject(&self, user_identifier: &str) -> MutexGuard<'_, ()> {
        let mut hasher = DefaultHasher::new();
        user_identifier.hash(&mut hasher);
        let stripe = (hasher.finish() % self.subject_locks.len() as u64) as usize;
        self.subject_locks[stripe].lock().await
    }
}

fn is_well_formed(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_hexdigit())
}
