//! Todo route handlers
//!
//! Every route here sits behind the bearer middleware and acts only on the
//! caller's own todos. A todo owned by someone else answers 404.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use todo_core::errors::TodoError;
use uuid::Uuid;

/// Parse the `{id}` path segment; a malformed id cannot name any todo
fn parse_todo_id(raw: &str) -> Result<Uuid, TodoError> {
    Uuid::parse_str(raw).map_err(|_| TodoError::NotFound)
}
