use actix_web::{web, HttpResponse};
use validator::Validate;

use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

use super::cookie::refresh_cookie;

/// Handler for POST /v1/auth/login
///
/// Returns the access token in the body and sets the refresh token as an
/// HttpOnly cookie.
///
/// ## Errors
/// - 400 Bad Request: Validation failed
/// - 401 Unauthorized: "Invalid email or password"
/// - 500 Internal Server Error: "Login failed. Try again later."
pub async fn login<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    request.validate()?;

    let result = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie(&state.cookie, &result.refresh_token))
        .json(ApiResponse::success(LoginResponse {
            access_token: result.access_token,
            user: result.user,
        })))
}
