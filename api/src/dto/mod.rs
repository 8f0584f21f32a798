//! Request and response bodies of the HTTP API

pub mod auth;
pub mod todo;

pub use auth::*;
pub use todo::*;
