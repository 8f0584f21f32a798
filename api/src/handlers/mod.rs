//! Request-independent handlers: error mapping and extractor error hooks

pub mod error;

pub use error::{json_error_handler, query_error_handler, status_for, ApiError};
