//! Test doubles for the authentication service

use async_trait::async_trait;
use std::sync::Arc;
use todo_shared::config::PasswordConfig;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{InMemoryTokenRepository, InMemoryUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::password::PasswordService;
use crate::services::token::{TokenService, TokenServiceConfig};

/// User repository whose every call fails like an unreachable database
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, DomainError> {
        Err(DomainError::internal("connection refused"))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
        Err(DomainError::internal("connection refused"))
    }

    async fn create(&self, _user: User) -> Result<User, DomainError> {
        Err(DomainError::internal("connection refused"))
    }
}

/// Service wired to in-memory repositories, with handles kept for assertions
pub struct TestHarness {
    pub service: AuthService<InMemoryUserRepository, InMemoryTokenRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub tokens: Arc<InMemoryTokenRepository>,
    pub token_service: Arc<TokenService>,
}

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        ..Default::default()
    }))
}

pub fn password_service() -> Arc<PasswordService> {
    Arc::new(PasswordService::new(PasswordConfig { bcrypt_cost: 4 }).unwrap())
}

pub fn create_harness() -> TestHarness {
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(InMemoryTokenRepository::new());
    let token_service = token_service();

    let service = AuthService::new(
        Arc::clone(&users),
        Arc::clone(&tokens),
        Arc::clone(&token_service),
        password_service(),
    );

    TestHarness {
        service,
        users,
        tokens,
        token_service,
    }
}
