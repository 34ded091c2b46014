//! Logging initialisation.
//!
//! Logs are written to stderr so that stdout carries only the rendered
//! context. `RUST_LOG` takes precedence over the level chosen here.

use crate::error::{DocVersionsError, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default level: `debug` when verbose, otherwise `warn`.
pub fn default_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose).to_string().to_lowercase()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| DocVersionsError::config(format!("Failed to initialize logging: {}", e)))
}
