//! In-memory implementation of TokenRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::trait_::TokenRepository;

/// Refresh token repository backed by a process-local map keyed by hash
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl InMemoryTokenRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, revoked ones included
    pub async fn count(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// All records owned by a user
    pub async fn tokens_for_user(&self, user_id: Uuid) -> Vec<RefreshToken> {
        let tokens = self.tokens.read().await;
        tokens
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::internal("Refresh token hash already stored"));
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn revoke_by_hash(&self, token_hash: &str) -> Result<bool, DomainError> {
        // Check and update under one write guard
        let mut tokens = self.tokens.write().await;
        Ok(tokens
            .get_mut(token_hash)
            .map(|token| token.revoke())
            .unwrap_or(false))
    }

    async fn revoke_all_by_user_id(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens
            .values_mut()
            .filter(|t| t.user_id == user_id)
            .map(|t| t.revoke())
            .filter(|revoked| *revoked)
            .count())
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, t| t.expires_at >= cutoff);
        Ok(before - tokens.len())
    }
}
