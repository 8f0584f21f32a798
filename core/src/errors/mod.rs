//! Domain-specific error types and error handling.

mod kind;
mod types;

pub use kind::ErrorKind;
pub use types::{AuthError, TodoError, TokenError};

use thiserror::Error;

/// Message shown to clients for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Todo(#[from] TodoError),
}

impl DomainError {
    /// Shorthand for an internal error with context
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Unauthorized => ErrorKind::Unauthorized,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(err) => match err {
                AuthError::InvalidCredentials => ErrorKind::Unauthorized,
                AuthError::LoginFailed => ErrorKind::Internal,
                AuthError::EmailAlreadyExists => ErrorKind::Conflict,
                AuthError::UserNotFound => ErrorKind::NotFound,
            },
            DomainError::Token(err) => match err {
                TokenError::TokenGenerationFailed => ErrorKind::Internal,
                _ => ErrorKind::Unauthorized,
            },
            DomainError::Todo(err) => match err {
                TodoError::NotFound => ErrorKind::NotFound,
                TodoError::InvalidName | TodoError::EmptyUpdate => ErrorKind::Validation,
            },
        }
    }

    /// Message safe to return to a client
    ///
    /// Internal details are replaced by a generic message, except for errors
    /// that already carry a client-facing wording.
    pub fn client_message(&self) -> String {
        match self {
            DomainError::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
