// Error Types
// Failures raised while loading configuration and starting logging

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the YAML configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors raised while installing the log subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{0}'")]
    Filter(String),

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}
