//! Repository interfaces and their in-memory implementations.

pub mod todo;
pub mod token;
pub mod user;

pub use todo::{InMemoryTodoRepository, TodoRepository};
pub use token::{InMemoryTokenRepository, TokenRepository};
pub use user::{InMemoryUserRepository, UserRepository};
