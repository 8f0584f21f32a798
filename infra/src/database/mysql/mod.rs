//! MySQL repository implementations

mod todo_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use todo_repository_impl::MySqlTodoRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use std::sync::Arc;

use super::connection::DatabasePool;

/// The three MySQL repositories sharing one pool
#[derive(Clone)]
pub struct MySqlRepositories {
    pub users: Arc<MySqlUserRepository>,
    pub tokens: Arc<MySqlTokenRepository>,
    pub todos: Arc<MySqlTodoRepository>,
}

impl MySqlRepositories {
    /// Build every repository on top of `pool`
    pub fn new(pool: &DatabasePool) -> Self {
        let pool = pool.get_pool().clone();
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            tokens: Arc::new(MySqlTokenRepository::new(pool.clone())),
            todos: Arc::new(MySqlTodoRepository::new(pool)),
        }
    }
}

/// Whether a driver error is a unique key violation
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}
