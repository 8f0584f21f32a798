//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing, refresh cookie, password hashing, token cleanup
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use auth::{AuthConfig, CleanupConfig, CookieConfig, JwtConfig, PasswordConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let config = Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(environment.is_production()),
            cors: CorsConfig::from_env(),
        };

        if environment.is_production() && config.auth.jwt.is_using_default_secret() {
            warn!("Running in production with default token secrets");
        }

        config
    }

    /// Configuration suitable for tests: in-memory stores and cheap hashing
    pub fn for_tests() -> Self {
        let mut config = Self {
            environment: Environment::Test,
            ..Default::default()
        };
        config.auth.password.bcrypt_cost = 4;
        config
    }
}
