use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use todo_core::domain::entities::todo::{Priority, Todo, TodoChanges, TodoFilter};
use todo_shared::types::PaginatedResponse;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 255, message = "Todo name is required"))]
    pub name: String,

    pub priority: Priority,
}

/// Partial update; absent fields stay as they are
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 255, message = "Todo name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    pub priority: Option<Priority>,

    pub completed: Option<bool>,
}

impl From<UpdateTodoRequest> for TodoChanges {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            name: request.name,
            priority: request.priority,
            completed: request.completed,
        }
    }
}

/// Query string of `GET /v1/todo/list`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTodosQuery {
    pub priority: Option<Priority>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListTodosQuery {
    pub fn filter(&self) -> TodoFilter {
        TodoFilter {
            priority: self.priority,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub name: String,
    pub priority: Priority,
    pub completed: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            name: todo.name,
            priority: todo.priority,
            completed: todo.completed,
            user_id: todo.user_id,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListResponse {
    pub todos: Vec<TodoResponse>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl From<PaginatedResponse<Todo>> for TodoListResponse {
    fn from(page: PaginatedResponse<Todo>) -> Self {
        let page = page.map(TodoResponse::from);
        Self {
            todos: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTodoResponse {
    pub id: Uuid,
    pub message: String,
}
