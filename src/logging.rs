// Logging setup
// Logs go to a file so they never draw over the terminal UI

use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Build the filter from RUST_LOG, falling back to the configured level
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|_| LoggingError::Filter(level.to_string())),
    }
}

/// Install the global subscriber. Returns false when no log file is configured.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.clone(),
            source,
        })?;

    fmt()
        .with_env_filter(build_filter(&config.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(true)
}
