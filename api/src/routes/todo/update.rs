use actix_web::{web, HttpResponse};
use validator::Validate;

use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::todo::{TodoResponse, UpdateTodoRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

use super::parse_todo_id;

/// Handler for PATCH /v1/todo/list/{id}
///
/// Partial update of `name`, `priority` and `completed`; at least one must be
/// present.
pub async fn update_todo<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    auth: AuthContext,
    path: web::Path<String>,
    request: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let todo_id = parse_todo_id(&path)?;
    request.validate()?;

    let todo = state
        .todo_service
        .update(auth.user_id, todo_id, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(TodoResponse::from(todo))))
}
