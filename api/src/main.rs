use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use todo_api::{config, create_app, AppState};
use todo_core::repositories::{
    InMemoryTodoRepository, InMemoryTokenRepository, InMemoryUserRepository, TodoRepository,
    TokenRepository, UserRepository,
};
use todo_core::services::token::TokenCleanupService;
use todo_infra::{DatabasePool, MySqlRepositories};
use todo_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    config::init_tracing();

    let config = AppConfig::from_env();
    info!("Starting todo API in {} mode", config.environment);

    if config.environment.uses_in_memory_store() {
        info!("Using in-memory repositories");
        serve(
            config,
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryTokenRepository::new()),
            Arc::new(InMemoryTodoRepository::new()),
        )
        .await
    } else {
        let pool = DatabasePool::connect(config.database.clone())
            .await
            .context("failed to initialize the database")?;
        info!("{}", pool.get_statistics());

        let repositories = MySqlRepositories::new(&pool);
        let result = serve(
            config,
            repositories.users,
            repositories.tokens,
            repositories.todos,
        )
        .await;

        pool.close().await;
        result
    }
}

/// Wire the services on top of the given repositories and run the server
async fn serve<U, T, D>(
    config: AppConfig,
    users: Arc<U>,
    tokens: Arc<T>,
    todos: Arc<D>,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    D: TodoRepository + 'static,
{
    if config.auth.cleanup.enabled {
        Arc::new(TokenCleanupService::new(
            Arc::clone(&tokens),
            config.auth.cleanup.clone(),
        ))
        .start_background_task();
    }

    let state = web::Data::new(AppState::new(&config, users, tokens, todos)?);
    let bind_address = config.server.bind_address();
    info!("Listening on {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
