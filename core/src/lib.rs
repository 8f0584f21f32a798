//! # Todo Core
//!
//! Core business logic and domain layer for the todo service.
//! This crate contains domain entities, business services, repository interfaces
//! with in-memory implementations, and the error taxonomy.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Priority, RefreshToken, Todo, TodoChanges, TodoFilter, TokenPair, TokenType, User};
pub use domain::value_objects::{AuthenticatedUser, LoginResult, UserProfile};
pub use errors::{AuthError, DomainError, DomainResult, ErrorKind, TodoError, TokenError};
pub use repositories::{
    InMemoryTodoRepository, InMemoryTokenRepository, InMemoryUserRepository, TodoRepository,
    TokenRepository, UserRepository,
};
pub use services::{
    AuthService, PasswordService, RefreshTokenStore, TodoService,
    TokenCleanupService, TokenService, TokenServiceConfig,
};
