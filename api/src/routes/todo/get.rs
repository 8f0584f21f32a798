use actix_web::{web, HttpResponse};

use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::todo::TodoResponse;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

use super::parse_todo_id;

/// Handler for GET /v1/todo/list/{id}
pub async fn get_todo<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let todo_id = parse_todo_id(&path)?;
    let todo = state.todo_service.get(auth.user_id, todo_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(TodoResponse::from(todo))))
}
