use actix_web::{web, HttpRequest, HttpResponse};

use todo_core::errors::TokenError;
use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{AccessTokenResponse, RefreshTokenRequest};
use crate::handlers::ApiError;

use super::cookie::{presented_refresh_token, refresh_cookie};

/// Handler for POST /v1/auth/refresh-token
///
/// Consumes the presented refresh token and answers with a new access token.
/// The replacement refresh token replaces the cookie.
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid, unknown, revoked or expired token,
///   or the owner no longer exists
pub async fn refresh_token<U, T, D>(
    req: HttpRequest,
    state: web::Data<AppState<U, T, D>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let raw_token = presented_refresh_token(&req, &state.cookie, body.as_deref())
        .ok_or(TokenError::MissingRefreshToken)?;

    let tokens = state.auth_service.refresh_token(&raw_token).await?;

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie(&state.cookie, &tokens.refresh_token))
        .json(ApiResponse::success(AccessTokenResponse {
            access_token: tokens.access_token,
        })))
}
