use actix_web::{web, HttpResponse};

use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for GET /v1/auth/me
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid access token
/// - 404 Not Found: The account was deleted after the token was issued
pub async fn me<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let profile = state.auth_service.get_profile(auth.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}
