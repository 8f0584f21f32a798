//! # Infrastructure Layer
//!
//! Concrete persistence for the todo service. The core crate defines the
//! repository traits and ships in-memory implementations; this crate backs
//! the same traits with MySQL through SQLx.
//!
//! ## Contents
//!
//! - **Database**: connection pooling, embedded migrations and the MySQL
//!   repositories for users, refresh tokens and todos

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlRepositories, MySqlTodoRepository, MySqlTokenRepository, MySqlUserRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
