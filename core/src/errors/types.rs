//! Domain-specific error types for authentication, tokens and todos
//!
//! The `Display` text of every variant is the message returned to clients,
//! so these strings are part of the public contract.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the two cases are indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Unexpected failure while logging in
    #[error("Login failed. Try again later.")]
    LoginFailed,

    #[error("User with this email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,
}

/// Token-related errors
///
/// Signature, expiry, structure and type failures all collapse into
/// `InvalidAccessToken` / `InvalidRefreshToken`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing or invalid authorization header")]
    MissingAuthorizationHeader,

    #[error("Invalid or expired access token")]
    InvalidAccessToken,

    #[error("Refresh token not found. Please login again.")]
    MissingRefreshToken,

    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    #[error("Refresh token has been revoked")]
    RefreshTokenRevoked,

    #[error("Refresh token has expired")]
    RefreshTokenExpired,

    /// The owner of a structurally valid refresh token no longer exists
    #[error("User not found")]
    OwnerNotFound,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Todo-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Absent todo, or one owned by somebody else
    #[error("Todo not found")]
    NotFound,

    #[error("Todo name must be between 1 and 255 characters")]
    InvalidName,

    #[error("At least one of name, priority or completed must be provided")]
    EmptyUpdate,
}
