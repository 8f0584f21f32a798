//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Class of a signed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims structure for JWT payload
///
/// Serialized as `{userId, email, type, iat, exp, jti}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Owner of the token
    #[serde(rename = "userId")]
    pub user_id: Uuid,

    /// Owner's email at issuance time
    pub email: String,

    /// Token class; checked on every verification
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID, keeps two tokens issued in the same second distinct
    pub jti: String,
}

impl Claims {
    /// Creates new claims expiring `ttl_seconds` from now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `email` - The user's email
    /// * `token_type` - Access or refresh
    /// * `ttl_seconds` - Lifetime of the token
    pub fn new(user_id: Uuid, email: impl Into<String>, token_type: TokenType, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            user_id,
            email: email.into(),
            token_type,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Refresh token record stored in the database
///
/// Only the hash of the raw token is kept; the raw value never reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Owner of the token
    pub user_id: Uuid,

    /// SHA-256 hex digest of the raw token
    pub token_hash: String,

    /// When the record stops being accepted
    pub expires_at: DateTime<Utc>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// Whether the token has been revoked
    pub is_revoked: bool,

    /// When the token was revoked, if it was
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Creates a new active refresh token record
    pub fn new(user_id: Uuid, token_hash: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            expires_at,
            created_at: Utc::now(),
            is_revoked: false,
            revoked_at: None,
        }
    }

    /// Checks if the stored expiry has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the token is neither revoked nor expired
    pub fn is_active(&self) -> bool {
        !self.is_revoked && !self.is_expired()
    }

    /// Marks the token as revoked
    ///
    /// # Returns
    ///
    /// `false` if it was already revoked
    pub fn revoke(&mut self) -> bool {
        if self.is_revoked {
            return false;
        }
        self.is_revoked = true;
        self.revoked_at = Some(Utc::now());
        true
    }
}

/// A persisted refresh token together with its raw value
///
/// Returned by the refresh-token store so the caller can hand the raw token
/// back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRefreshToken {
    /// Raw token as issued to the client
    pub token: String,

    /// Persisted metadata
    pub record: RefreshToken,
}

/// Access and refresh token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_with_wire_names() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com", TokenType::Access, 60);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["type"], "access");
        assert_eq!(json["userId"], claims.user_id.to_string());
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn test_claims_expiry() {
        let claims = Claims::new(Uuid::new_v4(), "a@b.com", TokenType::Refresh, 60);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn test_claims_have_unique_ids() {
        let user_id = Uuid::new_v4();
        let a = Claims::new(user_id, "a@b.com", TokenType::Refresh, 60);
        let b = Claims::new(user_id, "a@b.com", TokenType::Refresh, 60);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_refresh_token_revoke_once() {
        let mut token = RefreshToken::new(
            Uuid::new_v4(),
            "hash".to_string(),
            Utc::now() + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
        );
        assert!(token.is_active());
        assert!(token.revoke());
        assert!(token.revoked_at.is_some());
        assert!(!token.revoke());
        assert!(!token.is_active());
    }

    #[test]
    fn test_refresh_token_expired() {
        let token = RefreshToken::new(Uuid::new_v4(), "hash".to_string(), Utc::now() - Duration::seconds(1));
        assert!(token.is_expired());
        assert!(!token.is_active());
    }
}
