//! Refresh-token store: hashes raw tokens and delegates to a TokenRepository

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::domain::entities::token::{RefreshToken, StoredRefreshToken};
use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Durable record of issued refresh tokens, addressed by token hash
///
/// Callers deal in raw tokens; only the SHA-256 digest reaches the repository.
pub struct RefreshTokenStore<R: TokenRepository> {
    repository: Arc<R>,
}

impl<R: TokenRepository> Clone for RefreshTokenStore<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TokenRepository> RefreshTokenStore<R> {
    /// Create a store over a repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Hash a token value using SHA-256
    ///
    /// # Returns
    /// Lowercase hexadecimal digest, 64 characters
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Persist a freshly issued refresh token
    ///
    /// # Arguments
    /// * `raw_token` - Token as handed to the client
    /// * `user_id` - Owner
    /// * `expires_at` - Store-side expiry
    ///
    /// # Returns
    /// * `Ok(StoredRefreshToken)` - Persisted record with the raw token attached
    /// * `Err(DomainError)` - Storage failure
    pub async fn save(
        &self,
        raw_token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<StoredRefreshToken, DomainError> {
        let record = RefreshToken::new(user_id, Self::hash_token(raw_token), expires_at);
        let record = self.repository.save(record).await?;

        Ok(StoredRefreshToken {
            token: raw_token.to_string(),
            record,
        })
    }

    /// Look up a token by its raw value
    ///
    /// Lookup failures are logged and reported as `None`, same as a miss.
    pub async fn find_by_token(&self, raw_token: &str) -> Option<StoredRefreshToken> {
        match self.repository.find_by_hash(&Self::hash_token(raw_token)).await {
            Ok(record) => record.map(|record| StoredRefreshToken {
                token: raw_token.to_string(),
                record,
            }),
            Err(e) => {
                warn!("Refresh token lookup failed: {}", e);
                None
            }
        }
    }

    /// Revoke a token by its raw value
    ///
    /// # Returns
    /// * `Ok(true)` - This call revoked the token
    /// * `Ok(false)` - Unknown or already revoked; not an error
    pub async fn revoke_by_token(&self, raw_token: &str) -> Result<bool, DomainError> {
        self.repository
            .revoke_by_hash(&Self::hash_token(raw_token))
            .await
    }

    /// Revoke every active token owned by a user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens revoked
    pub async fn revoke_all_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError> {
        self.repository.revoke_all_by_user_id(user_id).await
    }
}
