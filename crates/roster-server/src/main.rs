//! Roster mock API binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `roster-config.yaml` (or `ROSTER_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Seed the character store
//! 4. Serve the API until `Ctrl-C`

use std::path::PathBuf;
use std::sync::Arc;

use roster_server::config::{DEFAULT_CONFIG_PATH, LoggingConfig};
use roster_server::{AppState, ConfigError, RosterConfig, ServerError, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Top-level error for the binary.
#[derive(Debug, thiserror::Error)]
enum MainError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The HTTP server failed.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    let config_path = std::env::var("ROSTER_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = RosterConfig::load(&config_path)?;

    init_tracing(&config.logging);

    info!(
        host = %config.server.host,
        port = config.server.port,
        environment = %config.server.environment,
        seed = config.dataset.seed,
        filler_count = config.dataset.filler_count,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::from_config(&config));
    {
        let store = state.store.read().await;
        let stats = store.statistics();
        info!(
            total = stats.total,
            unowned = stats.unowned,
            "Character store seeded"
        );
    }

    start_server(&config.server, state).await?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
