//! Refresh token repository trait.
//!
//! Records are addressed by the SHA-256 hash of the raw token. Hashing is the
//! job of [`RefreshTokenStore`](crate::services::token::RefreshTokenStore);
//! implementations only ever see hashes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for refresh token persistence
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The stored record
    /// * `Err(DomainError)` - Storage failure or duplicate hash
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Look up a record by token hash
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record found, revoked or not
    /// * `Ok(None)` - No record with that hash
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Revoke a record if it is not revoked yet
    ///
    /// This is a single compare-and-set: of several concurrent callers for the
    /// same hash, at most one observes `true`.
    ///
    /// # Returns
    /// * `Ok(true)` - This call revoked the token
    /// * `Ok(false)` - Unknown hash, or already revoked
    async fn revoke_by_hash(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Revoke every active record owned by a user
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records revoked by this call
    async fn revoke_all_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Delete records that expired before `cutoff`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError>;
}
