//! Application state and factory
//!
//! This module builds the shared service graph and provides the factory for
//! creating the Actix-web application. Both are generic over the repository
//! implementations so the same app runs on MySQL or in-memory stores.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use todo_core::errors::DomainError;
use todo_core::repositories::{TodoRepository, TokenRepository, UserRepository};
use todo_core::services::{
    auth::AuthService,
    password::PasswordService,
    todo::TodoService,
    token::{TokenService, TokenServiceConfig},
};
use todo_shared::config::{AppConfig, CookieConfig, CorsConfig, Environment};

use crate::handlers::{json_error_handler, query_error_handler, ApiError};
use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes::{auth, todo};

/// Application state that holds shared services
pub struct AppState<U, T, D>
where
    U: UserRepository,
    T: TokenRepository,
    D: TodoRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub todo_service: Arc<TodoService<D>>,
    pub token_service: Arc<TokenService>,
    /// Refresh cookie attributes
    pub cookie: CookieConfig,
    pub environment: Environment,
    pub cors: CorsConfig,
}

impl<U, T, D> AppState<U, T, D>
where
    U: UserRepository,
    T: TokenRepository,
    D: TodoRepository,
{
    /// Wire every service from configuration and the chosen repositories
    ///
    /// Fails only when the password hashing cost is rejected.
    pub fn new(
        config: &AppConfig,
        users: Arc<U>,
        tokens: Arc<T>,
        todos: Arc<D>,
    ) -> Result<Self, DomainError> {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
            config.auth.jwt.clone(),
        )));
        let password_service = Arc::new(PasswordService::new(config.auth.password.clone())?);

        let auth_service = Arc::new(AuthService::new(
            users,
            tokens,
            Arc::clone(&token_service),
            password_service,
        ));

        Ok(Self {
            auth_service,
            todo_service: Arc::new(TodoService::new(todos)),
            token_service,
            cookie: config.auth.cookie.clone(),
            environment: config.environment,
            cors: config.cors.clone(),
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T, D>(
    app_state: web::Data<AppState<U, T, D>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    let cors = create_cors(app_state.environment, &app_state.cors);
    let jwt = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Middleware runs bottom-up: tracing span first, then CORS
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register::<U, T, D>))
                        .route("/login", web::post().to(auth::login::login::<U, T, D>))
                        .route(
                            "/refresh-token",
                            web::post().to(auth::refresh::refresh_token::<U, T, D>),
                        )
                        .route("/logout", web::post().to(auth::logout::logout::<U, T, D>))
                        .route(
                            "/logout-all",
                            web::post()
                                .to(auth::logout::logout_all::<U, T, D>)
                                .wrap(jwt.clone()),
                        )
                        .route(
                            "/me",
                            web::get().to(auth::me::me::<U, T, D>).wrap(jwt.clone()),
                        ),
                )
                .service(
                    web::scope("/todo")
                        .wrap(jwt)
                        .route("/create", web::post().to(todo::create::create_todo::<U, T, D>))
                        .route("/list", web::get().to(todo::list::list_todos::<U, T, D>))
                        .route("/list/{id}", web::get().to(todo::get::get_todo::<U, T, D>))
                        .route(
                            "/list/{id}",
                            web::patch().to(todo::update::update_todo::<U, T, D>),
                        )
                        .route(
                            "/list/{id}",
                            web::delete().to(todo::delete::delete_todo::<U, T, D>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Default 404 handler
async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}
