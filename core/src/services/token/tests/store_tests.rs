//! Unit tests for the refresh-token store

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::repositories::{InMemoryTokenRepository, TokenRepository};
use crate::services::token::RefreshTokenStore;

fn create_store() -> (RefreshTokenStore<InMemoryTokenRepository>, Arc<InMemoryTokenRepository>) {
    let repo = Arc::new(InMemoryTokenRepository::new());
    (RefreshTokenStore::new(Arc::clone(&repo)), repo)
}

#[test]
fn test_token_hashing() {
    let hash = RefreshTokenStore::<InMemoryTokenRepository>::hash_token("test_token_123");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_consistent_hashing() {
    let a = RefreshTokenStore::<InMemoryTokenRepository>::hash_token("same");
    let b = RefreshTokenStore::<InMemoryTokenRepository>::hash_token("same");
    let c = RefreshTokenStore::<InMemoryTokenRepository>::hash_token("other");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[tokio::test]
async fn test_save_keeps_raw_token_out_of_storage() {
    let (store, repo) = create_store();
    let user_id = Uuid::new_v4();

    let stored = store
        .save("raw-token", user_id, Utc::now() + Duration::days(7))
        .await
        .unwrap();

    assert_eq!(stored.token, "raw-token");
    assert_ne!(stored.record.token_hash, "raw-token");
    assert!(stored.record.revoked_at.is_none());

    let persisted = repo.tokens_for_user(user_id).await;
    assert_eq!(persisted.len(), 1);
    assert!(persisted.iter().all(|t| t.token_hash != "raw-token"));
}

#[tokio::test]
async fn test_find_by_token() {
    let (store, _) = create_store();
    let user_id = Uuid::new_v4();
    store
        .save("raw-token", user_id, Utc::now() + Duration::days(7))
        .await
        .unwrap();

    let found = store.find_by_token("raw-token").await.unwrap();
    assert_eq!(found.token, "raw-token");
    assert_eq!(found.record.user_id, user_id);

    assert!(store.find_by_token("never-issued").await.is_none());
}

#[tokio::test]
async fn test_revoke_by_token() {
    let (store, repo) = create_store();
    store
        .save("raw-token", Uuid::new_v4(), Utc::now() + Duration::days(7))
        .await
        .unwrap();

    assert!(store.revoke_by_token("raw-token").await.unwrap());
    assert!(!store.revoke_by_token("raw-token").await.unwrap());
    assert!(!store.revoke_by_token("never-issued").await.unwrap());

    let hash = RefreshTokenStore::<InMemoryTokenRepository>::hash_token("raw-token");
    let record = repo.find_by_hash(&hash).await.unwrap().unwrap();
    assert!(record.is_revoked);
}

#[tokio::test]
async fn test_revoke_all_by_user_id() {
    let (store, _) = create_store();
    let user_id = Uuid::new_v4();
    for raw in ["t1", "t2"] {
        store
            .save(raw, user_id, Utc::now() + Duration::days(7))
            .await
            .unwrap();
    }

    assert_eq!(store.revoke_all_by_user_id(user_id).await.unwrap(), 2);
    assert!(store.find_by_token("t1").await.unwrap().record.is_revoked);
    assert!(store.find_by_token("t2").await.unwrap().record.is_revoked);
}
