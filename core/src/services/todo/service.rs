//! Ownership-scoped todo operations

use std::sync::Arc;
use todo_shared::types::{PaginatedResponse, Pagination};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::todo::{sanitize_todo_name, Priority, Todo, TodoChanges, TodoFilter};
use crate::errors::{DomainResult, TodoError};
use crate::repositories::TodoRepository;

/// Service for creating, listing, reading, updating and deleting todos
///
/// Every operation is scoped to the requesting user. A todo owned by someone
/// else is reported exactly like a missing one.
pub struct TodoService<D: TodoRepository> {
    repository: Arc<D>,
}

impl<D: TodoRepository> TodoService<D> {
    /// Create a new todo service
    pub fn new(repository: Arc<D>) -> Self {
        Self { repository }
    }

    /// Create a todo owned by `user_id`
    ///
    /// # Returns
    ///
    /// * `Ok(Todo)` - The stored todo, not completed
    /// * `Err(DomainError::Todo(TodoError::InvalidName))` - Name empty after
    ///   trimming, or too long
    pub async fn create(&self, user_id: Uuid, name: &str, priority: Priority) -> DomainResult<Todo> {
        let name = sanitize_todo_name(name).ok_or(TodoError::InvalidName)?;
        let todo = self.repository.create(Todo::new(user_id, name, priority)).await?;

        info!("User {} created todo {}", user_id, todo.id);
        Ok(todo)
    }

    /// One page of the user's todos, newest first
    pub async fn list(
        &self,
        user_id: Uuid,
        filter: TodoFilter,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<Todo>> {
        let (todos, total) = self
            .repository
            .find_by_user(user_id, filter, pagination)
            .await?;

        Ok(PaginatedResponse::new(todos, pagination, total))
    }

    /// Fetch a single todo
    ///
    /// # Returns
    ///
    /// * `Ok(Todo)` - The todo, owned by `user_id`
    /// * `Err(DomainError::Todo(TodoError::NotFound))` - Missing or not owned
    pub async fn get(&self, user_id: Uuid, todo_id: Uuid) -> DomainResult<Todo> {
        self.find_owned(user_id, todo_id).await
    }

    /// Apply a partial update
    ///
    /// # Returns
    ///
    /// * `Ok(Todo)` - The updated todo
    /// * `Err(DomainError::Todo(TodoError::EmptyUpdate))` - No field given
    /// * `Err(DomainError::Todo(TodoError::InvalidName))` - Bad new name
    /// * `Err(DomainError::Todo(TodoError::NotFound))` - Missing or not owned
    pub async fn update(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        mut changes: TodoChanges,
    ) -> DomainResult<Todo> {
        if changes.is_empty() {
            return Err(TodoError::EmptyUpdate.into());
        }
        if let Some(name) = changes.name.take() {
            changes.name = Some(sanitize_todo_name(&name).ok_or(TodoError::InvalidName)?);
        }

        let mut todo = self.find_owned(user_id, todo_id).await?;
        todo.apply(changes);

        self.repository.update(todo).await
    }

    /// Delete a todo
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - Id of the deleted todo
    /// * `Err(DomainError::Todo(TodoError::NotFound))` - Missing or not owned
    pub async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> DomainResult<Uuid> {
        let todo = self.find_owned(user_id, todo_id).await?;

        if !self.repository.delete(todo.id).await? {
            return Err(TodoError::NotFound.into());
        }

        info!("User {} deleted todo {}", user_id, todo.id);
        Ok(todo.id)
    }

    async fn find_owned(&self, user_id: Uuid, todo_id: Uuid) -> DomainResult<Todo> {
        let todo = self
            .repository
            .find_by_id(todo_id)
            .await?
            .ok_or(TodoError::NotFound)?;

        if !todo.is_owned_by(user_id) {
            warn!("User {} attempted to access todo {} of another user", user_id, todo_id);
            return Err(TodoError::NotFound.into());
        }

        Ok(todo)
    }
}
