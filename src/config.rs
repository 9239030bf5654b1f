// Configuration loading module

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::ConfigError;
use crate::ui::Theme;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// The tab container itself takes no inputs: a fresh start always opens on
/// the active simulations, so there is no start-tab setting here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApplicationConfig {
    pub header: HeaderConfig,
    pub tick_rate_ms: u64,
    pub mouse_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub title: String,
    pub subtitle: String,
    pub banner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log destination; logging is disabled when unset
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            header: HeaderConfig::default(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: true,
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Parse configuration from YAML text. `path` is only used for error messages.
pub fn parse_config(contents: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    // An empty file deserializes to unit, not a mapping
    if contents.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("", Path::new("empty.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.application.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.ui.theme, Theme::Dark);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let yaml = r#"
application:
  header:
    title: "Sim Lab"
ui:
  theme: light
"#;
        let config = parse_config(yaml, Path::new("partial.yaml")).unwrap();
        assert_eq!(config.application.header.title, "Sim Lab");
        assert_eq!(config.application.header.banner, DEFAULT_BANNER);
        assert!(config.application.mouse_enabled);
        assert_eq!(config.ui.theme, Theme::Light);
    }

    #[test]
    fn test_logging_section() {
        let yaml = "logging:\n  file: /tmp/sim.log\n  level: debug\n";
        let config = parse_config(yaml, Path::new("log.yaml")).unwrap();
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/sim.log")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_start_tab_is_not_configurable() {
        for tab in ["active", "templates", "history", "guide"] {
            let yaml = format!("application:\n  initial_tab: {}\n", tab);
            let err = parse_config(&yaml, Path::new("start.yaml")).unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }));
        }
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let yaml = "ui:\n  theme: neon\n";
        let err = parse_config(yaml, Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
