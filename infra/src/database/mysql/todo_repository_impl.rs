//! MySQL implementation of the TodoRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use todo_shared::types::Pagination;
use uuid::Uuid;

use todo_core::domain::entities::todo::{Priority, Todo, TodoFilter};
use todo_core::errors::{DomainError, TodoError};
use todo_core::repositories::TodoRepository;

/// MySQL implementation of TodoRepository
///
/// Listing is served by the `(user_id, created_at)` index.
pub struct MySqlTodoRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTodoRepository {
    /// Create a new MySQL todo repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Todo entity
    fn row_to_todo(row: &sqlx::mysql::MySqlRow) -> Result<Todo, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        let priority: String = row
            .try_get("priority")
            .map_err(|e| DomainError::internal(format!("Failed to get priority: {}", e)))?;

        Ok(Todo {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid todo UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            priority: priority
                .parse::<Priority>()
                .map_err(DomainError::internal)?,
            completed: row
                .try_get("completed")
                .map_err(|e| DomainError::internal(format!("Failed to get completed: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl TodoRepository for MySqlTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        let query = r#"
            INSERT INTO todos (
                id, name, priority, completed, user_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(todo.id.to_string())
            .bind(&todo.name)
            .bind(todo.priority.as_str())
            .bind(todo.completed)
            .bind(todo.user_id.to_string())
            .bind(todo.created_at)
            .bind(todo.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create todo: {}", e)))?;

        Ok(todo)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError> {
        let query = r#"
            SELECT id, name, priority, completed, user_id, created_at, updated_at
            FROM todos
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find todo: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_todo(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: TodoFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Todo>, u64), DomainError> {
        let priority = filter.priority.map(|p| p.as_str());

        let count_row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM todos
            WHERE user_id = ? AND (? IS NULL OR priority = ?)
            "#,
        )
        .bind(user_id.to_string())
        .bind(priority)
        .bind(priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to count todos: {}", e)))?;

        let total: i64 = count_row
            .try_get("total")
            .map_err(|e| DomainError::internal(format!("Failed to get total: {}", e)))?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, priority, completed, user_id, created_at, updated_at
            FROM todos
            WHERE user_id = ? AND (? IS NULL OR priority = ?)
            ORDER BY created_at DESC, id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(priority)
        .bind(priority)
        .bind(pagination.limit)
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to list todos: {}", e)))?;

        let todos = rows
            .iter()
            .map(Self::row_to_todo)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((todos, total.max(0) as u64))
    }

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError> {
        let query = r#"
            UPDATE todos SET
                name = ?,
                priority = ?,
                completed = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&todo.name)
            .bind(todo.priority.as_str())
            .bind(todo.completed)
            .bind(todo.updated_at)
            .bind(todo.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update todo: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound.into());
        }

        Ok(todo)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete todo: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
