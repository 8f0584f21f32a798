//! Startup configuration: `.env` loading and tracing setup

use tracing_subscriber::EnvFilter;

/// Load `.env` into the process environment if the file exists
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` controls the filter; without it everything at `info` and above
/// is printed.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
