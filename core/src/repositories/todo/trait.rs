//! Todo repository trait.

use async_trait::async_trait;
use todo_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::todo::{Todo, TodoFilter};
use crate::errors::DomainError;

/// Repository trait for Todo persistence
///
/// Ownership is not enforced here; [`TodoService`](crate::services::todo::TodoService)
/// checks it on every operation.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo
    async fn create(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Find a todo by id regardless of owner
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError>;

    /// One page of a user's todos, newest first, plus the total match count
    ///
    /// # Returns
    /// * `Ok((todos, total))` - `todos` holds at most `pagination.limit` items
    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: TodoFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Todo>, u64), DomainError>;

    /// Replace a stored todo
    ///
    /// # Returns
    /// * `Err(DomainError::Todo(TodoError::NotFound))` - No todo with that id
    async fn update(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Delete a todo
    ///
    /// # Returns
    /// * `Ok(true)` - The todo existed and was removed
    /// * `Ok(false)` - No todo with that id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
