//! Business services containing domain logic and use cases.

pub mod auth;
pub mod password;
pub mod todo;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use password::PasswordService;
pub use todo::TodoService;
pub use token::{RefreshTokenStore, TokenCleanupService, TokenService, TokenServiceConfig};
