//! Closed set of error categories used to pick a transport status

use serde::Serialize;

/// Category of a [`DomainError`](super::DomainError)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed, missing or out-of-range input
    Validation,
    /// Missing, invalid, expired or revoked credentials
    Unauthorized,
    /// Absent resource, or one the caller does not own
    NotFound,
    /// Unique key already taken
    Conflict,
    /// Store, signing or other unexpected failure
    Internal,
}
