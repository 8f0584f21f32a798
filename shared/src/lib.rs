//! Shared utilities and common types for the todo service
//!
//! - Configuration types loaded from the environment
//! - Response envelope and pagination types
//! - Expiry string parsing

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CleanupConfig, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, PasswordConfig, ServerConfig,
};
pub use types::{ApiResponse, PaginatedResponse, Pagination, ResponseStatus};
