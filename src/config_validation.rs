// Configuration validation module

use std::path::{Path, PathBuf};

use crate::config::{load_config, AppConfig};
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::error::ConfigError;

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Load and validate configuration.
///
/// An explicit path must exist. Without one, `simulation-manager.yaml` in the
/// working directory is used if present, otherwise the built-in defaults.
pub fn load_and_validate_config(config_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let (path, explicit) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !explicit && !path.exists() {
        return Ok(LoadedConfig {
            config: AppConfig::default(),
            source: ConfigSource::Defaults,
        });
    }

    let config = load_config(&path)?;
    validate_config(&config)?;

    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}

/// Check values that deserialize fine but cannot be used
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.application.tick_rate_ms == 0 {
        return Err(ConfigError::Invalid(
            "application.tick_rate_ms must be greater than 0".to_string(),
        ));
    }

    if config.application.header.title.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "application.header.title must not be empty".to_string(),
        ));
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::Invalid("logging.level must not be empty".to_string()));
    }

    Ok(())
}
