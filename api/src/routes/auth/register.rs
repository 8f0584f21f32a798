use actix_web::{web, HttpResponse};
use validator::Validate;

use todo_core::domain::value_objects::UserProfile;
use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::RegisterRequest;
use crate::handlers::ApiError;

/// Handler for POST /v1/auth/register
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "alice@example.com", "password": "Password123" }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "status": "success",
///     "data": { "id": "...", "email": "alice@example.com", "name": "Alice",
///               "createdAt": "...", "updatedAt": "..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Validation failed
/// - 409 Conflict: Email already registered
pub async fn register<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    request.validate()?;
    let RegisterRequest {
        name,
        email,
        password,
    } = request.into_inner();

    let user = state.auth_service.register(name, &email, &password).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(UserProfile::from(&user))))
}
