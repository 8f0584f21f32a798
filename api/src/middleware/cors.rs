//! CORS middleware configuration for cross-origin requests.
//!
//! Browsers send the refresh cookie cross-origin only when credentials are
//! allowed, so every variant below supports credentials.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use todo_shared::config::{CorsConfig, Environment};

const MAX_AGE_SECONDS: usize = 3600;

/// Creates a CORS middleware instance configured for the given environment.
///
/// Development and test mirror any origin. Production only admits the
/// origins listed in `CORS_ALLOWED_ORIGINS`; with an empty list no
/// cross-origin request is allowed.
pub fn create_cors(environment: Environment, config: &CorsConfig) -> Cors {
    if environment.is_production() {
        create_production_cors(config)
    } else {
        create_development_cors()
    }
}

fn base_cors() -> Cors {
    Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(MAX_AGE_SECONDS)
}

fn create_development_cors() -> Cors {
    tracing::debug!("Configuring permissive CORS");
    base_cors().allow_any_origin()
}

fn create_production_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(base_cors(), |cors, origin| {
            tracing::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}
