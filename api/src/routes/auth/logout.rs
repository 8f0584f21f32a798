use actix_web::{web, HttpRequest, HttpResponse};

use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{LogoutAllResponse, LogoutResponse, RefreshTokenRequest};
use crate::handlers::ApiError;
use crate::middleware::auth::AuthContext;

use super::cookie::{presented_refresh_token, removal_cookie};

/// Handler for POST /v1/auth/logout
///
/// Revokes the presented refresh token, if any, and clears the cookie.
/// Always answers 200 unless the store fails.
pub async fn logout<U, T, D>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, D>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    if let Some(raw_token) = presented_refresh_token(&req, &state.cookie, body.as_deref()) {
        state.auth_service.logout(&raw_token).await?;
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(&state.cookie))
        .json(ApiResponse::success(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })))
}

/// Handler for POST /v1/auth/logout-all
///
/// Requires a Bearer access token. Revokes every refresh token of the caller.
pub async fn logout_all<U, T, D>(
    state: web::Data<AppState<U, T, D>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let revoked_count = state.auth_service.logout_all(auth.user_id).await?;

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(&state.cookie))
        .json(ApiResponse::success(LogoutAllResponse {
            message: "Logged out from all sessions".to_string(),
            revoked_count,
        })))
}
