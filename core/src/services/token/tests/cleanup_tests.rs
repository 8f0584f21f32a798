//! Unit tests for the token cleanup service

use chrono::{Duration, Utc};
use std::sync::Arc;
use todo_shared::config::CleanupConfig;
use uuid::Uuid;

use crate::repositories::InMemoryTokenRepository;
use crate::services::token::{RefreshTokenStore, TokenCleanupService};

#[tokio::test]
async fn test_cleanup_respects_grace_period() {
    let repo = Arc::new(InMemoryTokenRepository::new());
    let store = RefreshTokenStore::new(Arc::clone(&repo));
    let user_id = Uuid::new_v4();

    store.save("long-gone", user_id, Utc::now() - Duration::days(30)).await.unwrap();
    store.save("just-expired", user_id, Utc::now() - Duration::days(1)).await.unwrap();
    store.save("active", user_id, Utc::now() + Duration::days(1)).await.unwrap();

    let service = TokenCleanupService::new(
        Arc::clone(&repo),
        CleanupConfig {
            enabled: true,
            grace_period_days: 7,
            ..Default::default()
        },
    );

    assert_eq!(service.run_cleanup().await.unwrap(), 1);
    assert_eq!(repo.count().await, 2);
    assert!(store.find_by_token("long-gone").await.is_none());
}
