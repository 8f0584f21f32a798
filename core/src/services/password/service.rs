//! bcrypt-backed password hashing

use todo_shared::config::PasswordConfig;

use crate::errors::DomainError;

const DUMMY_PASSWORD: &str = "dummy-password-for-timing";

/// Service for hashing and verifying passwords
///
/// bcrypt is CPU-bound, so both operations run on the blocking thread pool.
pub struct PasswordService {
    cost: u32,
    /// Hash compared against when the account does not exist
    dummy_hash: String,
}

impl PasswordService {
    /// Create a new password service
    ///
    /// Hashes the dummy password up front at the configured cost, so the
    /// very first unknown-email login already costs one verification only.
    ///
    /// # Returns
    /// * `Ok(PasswordService)` - Ready to use
    /// * `Err(DomainError)` - The configured cost is rejected by bcrypt
    pub fn new(config: PasswordConfig) -> Result<Self, DomainError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, config.bcrypt_cost)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))?;

        Ok(Self {
            cost: config.bcrypt_cost,
            dummy_hash,
        })
    }

    /// Hash a plaintext password
    ///
    /// # Returns
    /// * `Ok(String)` - bcrypt hash including salt and cost
    /// * `Err(DomainError)` - Hashing failed
    pub async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match
    /// * `Err(DomainError)` - Stored hash is malformed or the task failed
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password verify task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password verify failed: {}", e)))
    }

    /// Spend the same effort as a real verification, then report a mismatch
    ///
    /// Used when no account matches so response timing does not reveal
    /// whether an email is registered.
    pub async fn verify_against_dummy(&self, password: &str) -> Result<bool, DomainError> {
        self.verify(password, &self.dummy_hash).await?;
        Ok(false)
    }
}
