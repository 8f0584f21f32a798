//! # Todo API
//!
//! HTTP layer of the todo service: actix-web application factory, route
//! handlers, request DTOs, bearer-token middleware and error mapping.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
