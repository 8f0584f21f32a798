use actix_web::{web, HttpResponse};

use todo_core::errors::DomainError;
use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::{ApiResponse, Pagination};

use crate::app::AppState;
use crate::dto::todo::{ListTodosQuery, TodoListResponse};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for GET /v1/todo/list?priority=&page=&limit=
///
/// Newest todos first. `page` defaults to 1 and `limit` to 10 (max 100).
///
/// ## Errors
/// - 400 Bad Request: Unknown priority or out-of-range paging
/// - 401 Unauthorized: Missing or invalid access token
pub async fn list_todos<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    auth: AuthContext,
    query: web::Query<ListTodosQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let pagination = Pagination::from_query(query.page, query.limit).map_err(DomainError::validation)?;

    let page = state
        .todo_service
        .list(auth.user_id, query.filter(), pagination)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(TodoListResponse::from(page))))
}
