// Simulation Manager Library
// A TUI shell for managing training simulations: header banner, tab row and one mounted view

// Core infrastructure - tab domain, state and events
pub mod core;

// UI - TUI components, layout and event loop
pub mod ui;

// Child views mounted by the tab container
pub mod views;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Error types
pub mod error;

// Log subscriber setup
pub mod logging;

// Terminal setup and teardown
pub mod terminal;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use config::AppConfig;
pub use config_validation::{load_and_validate_config, ConfigSource, LoadedConfig};
pub use crate::core::{App, SimulationTab, TabDescriptor};
pub use error::{ConfigError, LoggingError};
pub use ui::{run_app, Theme};
