//! Conversion of domain and request errors into HTTP responses
//!
//! Every error leaves the service as `{status: "error", message, details?}`.
//! The status code is picked from [`ErrorKind`] alone.

use std::collections::BTreeMap;

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use todo_core::errors::{AuthError, DomainError, ErrorKind, TodoError, TokenError};
use todo_shared::types::ApiResponse;
use validator::ValidationErrors;

/// Errors returned by route handlers and middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure reported by a core service
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed field validation
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// Body or query string could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// No route matched
    #[error("Resource not found")]
    RouteNotFound,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError::Domain(err.into())
    }
}

impl ApiError {
    /// Category used to pick the status code
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Domain(err) => err.kind(),
            ApiError::Validation(_) | ApiError::BadRequest(_) => ErrorKind::Validation,
            ApiError::RouteNotFound => ErrorKind::NotFound,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            ApiError::Domain(err) => err.client_message(),
            other => other.to_string(),
        }
    }

    /// Per-field validation messages
    fn details(&self) -> Option<serde_json::Value> {
        let ApiError::Validation(errors) = self else {
            return None;
        };

        let fields: BTreeMap<String, Vec<String>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        serde_json::to_value(fields).ok()
    }
}

/// HTTP status for an error category
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind() == ErrorKind::Internal {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let mut body = ApiResponse::error(self.message());
        if let Some(details) = self.details() {
            body = body.with_details(details);
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// `JsonConfig` hook: malformed or mistyped bodies become 400 envelopes
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {}", e),
        JsonPayloadError::ContentType => "Content type must be application/json".to_string(),
        other => format!("Invalid request body: {}", other),
    };
    ApiError::BadRequest(message).into()
}

/// `QueryConfig` hook: bad query strings become 400 envelopes
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query parameters: {}", err)).into()
}
