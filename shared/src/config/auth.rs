//! Authentication configuration: token signing, refresh cookie, password
//! hashing and refresh-token cleanup

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::parse_duration_secs;

pub const DEFAULT_ACCESS_SECRET: &str = "dev-access-secret-key";
pub const DEFAULT_REFRESH_SECRET: &str = "dev-refresh-secret-key";

/// JWT signing configuration
///
/// Access and refresh tokens are signed with distinct secrets so that one
/// class can never validate as the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for access tokens
    pub access_secret: String,

    /// Secret for refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEFAULT_ACCESS_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    ///
    /// Expiries accept `15m`, `24h`, `7d` or bare seconds. Malformed values
    /// fall back to the defaults with a warning.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            access_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_token_expiry: expiry_from_env(
                "ACCESS_TOKEN_EXPIRY",
                defaults.access_token_expiry,
            ),
            refresh_token_expiry: expiry_from_env(
                "REFRESH_TOKEN_EXPIRY",
                defaults.refresh_token_expiry,
            ),
        }
    }

    /// Check if either secret is still the development default
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret == DEFAULT_ACCESS_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }
}

fn expiry_from_env(key: &str, default: i64) -> i64 {
    match std::env::var(key) {
        Ok(raw) => parse_duration_secs(&raw).unwrap_or_else(|| {
            warn!("Ignoring malformed {}={:?}, using {}s", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

/// Refresh token cookie settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name
    pub name: String,

    /// Path scope, limited to the auth routes
    pub path: String,

    /// Send only over HTTPS
    pub secure: bool,

    /// Max-Age in seconds
    pub max_age: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("refreshToken"),
            path: String::from("/v1/auth"),
            secure: false,
            max_age: 604800, // 7 days
        }
    }
}

impl CookieConfig {
    /// Mark the cookie as HTTPS-only
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Password hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 12 }
    }
}

impl PasswordConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|cost| (4..=31).contains(cost))
            .unwrap_or(12);

        Self { bcrypt_cost }
    }
}

/// Background cleanup of expired refresh tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Whether the periodic task runs at all
    pub enabled: bool,

    /// Seconds between cleanup cycles
    pub interval_seconds: u64,

    /// Days to keep a token after it expires
    pub grace_period_days: i64,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_seconds: 3600,
            grace_period_days: 7,
        }
    }
}

impl CleanupConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            enabled: std::env::var("TOKEN_CLEANUP_ENABLED")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.enabled),
            interval_seconds: std::env::var("TOKEN_CLEANUP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.interval_seconds),
            grace_period_days: defaults.grace_period_days,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Refresh token cleanup configuration
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// The refresh cookie's `Max-Age` follows the refresh token lifetime.
    pub fn from_env(secure_cookies: bool) -> Self {
        let jwt = JwtConfig::from_env();
        let cookie = CookieConfig {
            max_age: jwt.refresh_token_expiry,
            ..CookieConfig::default()
        }
        .with_secure(secure_cookies);

        Self {
            jwt,
            cookie,
            password: PasswordConfig::from_env(),
            cleanup: CleanupConfig::from_env(),
        }
    }
}
