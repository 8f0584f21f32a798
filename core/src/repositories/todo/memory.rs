//! In-memory implementation of TodoRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use todo_shared::types::Pagination;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::todo::{Todo, TodoFilter};
use crate::errors::{DomainError, TodoError};

use super::trait_::TodoRepository;

/// Todo repository backed by a process-local map
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl InMemoryTodoRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        todos.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos.get(&id).cloned())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        filter: TodoFilter,
        pagination: Pagination,
    ) -> Result<(Vec<Todo>, u64), DomainError> {
        let todos = self.todos.read().await;

        let mut matching: Vec<&Todo> = todos
            .values()
            .filter(|t| t.user_id == user_id)
            .filter(|t| filter.priority.map_or(true, |p| t.priority == p))
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect();

        Ok((page, total))
    }

    async fn update(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;

        match todos.get_mut(&todo.id) {
            Some(existing) => {
                *existing = todo.clone();
                Ok(todo)
            }
            None => Err(TodoError::NotFound.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut todos = self.todos.write().await;
        Ok(todos.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::todo::Priority;
    use chrono::{Duration, Utc};

    async fn seed(repo: &InMemoryTodoRepository, user_id: Uuid, count: usize) -> Vec<Todo> {
        let base = Utc::now();
        let mut created = Vec::new();
        for i in 0..count {
            let priority = if i % 2 == 0 { Priority::High } else { Priority::Low };
            let mut todo = Todo::new(user_id, format!("todo {}", i), priority);
            todo.created_at = base + Duration::seconds(i as i64);
            created.push(repo.create(todo).await.unwrap());
        }
        created
    }

    #[tokio::test]
    async fn test_newest_first_and_paged() {
        let repo = InMemoryTodoRepository::new();
        let user = Uuid::new_v4();
        seed(&repo, user, 5).await;

        let (page, total) = repo
            .find_by_user(user, TodoFilter::default(), Pagination::new(1, 2))
            .await
            .unwrap();
        assert_eq!(total, 5);
        assert_eq!(
            page.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["todo 4", "todo 3"]
        );

        let (last, _) = repo
            .find_by_user(user, TodoFilter::default(), Pagination::new(3, 2))
            .await
            .unwrap();
        assert_eq!(last.len(), 1);

        let (beyond, total) = repo
            .find_by_user(user, TodoFilter::default(), Pagination::new(4, 2))
            .await
            .unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn test_priority_filter_and_owner_scope() {
        let repo = InMemoryTodoRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        seed(&repo, alice, 5).await;
        seed(&repo, bob, 3).await;

        let filter = TodoFilter {
            priority: Some(Priority::High),
        };
        let (todos, total) = repo
            .find_by_user(alice, filter, Pagination::new(1, 10))
            .await
            .unwrap();
        assert_eq!(total, 3);
        assert!(todos.iter().all(|t| t.priority == Priority::High && t.user_id == alice));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemoryTodoRepository::new();
        let mut todo = seed(&repo, Uuid::new_v4(), 1).await.remove(0);

        todo.completed = true;
        repo.update(todo.clone()).await.unwrap();
        assert!(repo.find_by_id(todo.id).await.unwrap().unwrap().completed);

        assert!(repo.delete(todo.id).await.unwrap());
        assert!(!repo.delete(todo.id).await.unwrap());
        assert_eq!(
            repo.update(todo).await,
            Err(DomainError::Todo(TodoError::NotFound))
        );
    }
}
