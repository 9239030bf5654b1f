// Simulation Manager
// TUI application for managing training simulations

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use simulation_manager::logging::init_logging;
use simulation_manager::terminal::{init_terminal, install_panic_hook, restore_terminal};
use simulation_manager::{load_and_validate_config, run_app, App, ConfigSource, Theme};

/// Terminal UI for managing training simulations
#[derive(Parser, Debug)]
#[command(name = "simulation-manager", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Color theme (dark or light)
    #[arg(long)]
    theme: Option<Theme>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration from YAML file
    let loaded = load_and_validate_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let mut config = loaded.config;
    if let Some(theme) = cli.theme {
        config.ui.theme = theme;
    }

    init_logging(&config.logging).context("Failed to initialize logging")?;
    match &loaded.source {
        ConfigSource::File(path) => info!(path = %path.display(), "loaded configuration"),
        ConfigSource::Defaults => warn!("no configuration file found, using defaults"),
    }

    // Fresh mount: always starts on the active simulations
    let mut app = App::new();

    // Setup terminal
    let mouse_enabled = config.application.mouse_enabled;
    install_panic_hook(mouse_enabled);
    let mut terminal = init_terminal(mouse_enabled).context("Failed to set up terminal")?;

    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal even when the loop failed
    restore_terminal(&mut terminal, mouse_enabled).context("Failed to restore terminal")?;

    result
}
