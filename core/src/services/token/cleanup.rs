//! Token cleanup service for periodic removal of expired refresh tokens

use chrono::{Duration, Utc};
use std::sync::Arc;
use todo_shared::config::CleanupConfig;
use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Service for deleting refresh tokens long past their expiry
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: CleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    /// Create a new token cleanup service
    pub fn new(repository: Arc<R>, config: CleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// Deletes records whose expiry lies more than the grace period in the past.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    /// * `Err(DomainError)` - If the repository fails
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        let cutoff = Utc::now() - Duration::days(self.config.grace_period_days);
        let deleted = self.repository.delete_expired_before(cutoff).await?;
        info!("Deleted {} expired refresh tokens", deleted);
        Ok(deleted)
    }

    /// Start the cleanup service as a background task
    ///
    /// Does nothing when cleanup is disabled.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Token cleanup service started, running every {} seconds",
                interval.as_secs()
            );
            let mut ticker = tokio::time::interval(interval);

            loop {
                ticker.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!("Token cleanup cycle failed: {}", e);
                }
            }
        });
    }
}
