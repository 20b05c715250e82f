//! Logging setup
//!
//! Logs go to standard error so that standard output carries only the
//! streamed answer echo.

use crate::config::LoggingConfig;
use crate::utils::error::{GatewayError, Result};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            GatewayError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Install the global tracing subscriber
///
/// Fails if the level is not a valid filter directive or a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| GatewayError::Internal(format!("Failed to initialize logging: {}", e)))
}
