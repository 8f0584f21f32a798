use actix_web::{web, HttpResponse};
use validator::Validate;

use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::todo::{CreateTodoRequest, TodoResponse};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for POST /v1/todo/create
///
/// # Request Body
///
/// ```json
/// { "name": "Buy milk", "priority": "high" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty or overlong name, unknown priority
/// - 401 Unauthorized: Missing or invalid access token
pub async fn create_todo<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    auth: AuthContext,
    request: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    request.validate()?;

    let todo = state
        .todo_service
        .create(auth.user_id, &request.name, request.priority)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(TodoResponse::from(todo))))
}
