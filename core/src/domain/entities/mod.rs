//! Domain entities representing core business objects.

pub mod todo;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use todo::{sanitize_todo_name, Priority, Todo, TodoChanges, TodoFilter, MAX_TODO_NAME_LENGTH};
pub use token::{
    Claims, RefreshToken, StoredRefreshToken, TokenPair, TokenType, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::{normalize_email, User};
