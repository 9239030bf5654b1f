// Application constants

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "simulation-manager.yaml";

/// Input poll interval in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Default log level when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_TITLE: &str = "Simulation Management";
pub const DEFAULT_SUBTITLE: &str = "Manage training simulations, templates and debrief reports";
pub const DEFAULT_BANNER: &str = "Instructors see only simulations for their assigned programs.";

/// Key help shown in the footer
pub const FOOTER_HELP: &str =
    "q: Quit | 1-4: Select tab | Tab/→: Next tab | Shift+Tab/←: Previous tab | Click: Select tab";
