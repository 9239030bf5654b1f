// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Light/dark convention of the hosting terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ConfigError::Invalid(format!(
                "unknown theme '{}' (expected dark or light)",
                other
            ))),
        }
    }
}

/// Application color scheme and styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    theme: Theme,
}

impl Styles {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn text(&self) -> Color {
        match self.theme {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    fn muted(&self) -> Color {
        match self.theme {
            Theme::Dark => Color::Gray,
            Theme::Light => Color::DarkGray,
        }
    }

    fn accent(&self) -> Color {
        match self.theme {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        }
    }

    fn highlight(&self) -> Color {
        match self.theme {
            Theme::Dark => Color::Yellow,
            Theme::Light => Color::Rgb(180, 83, 9),
        }
    }

    // === Header / Footer ===

    pub fn header_title(&self) -> Style {
        Style::default()
            .fg(self.text())
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_subtitle(&self) -> Style {
        Style::default().fg(self.muted())
    }

    /// Informational banner below the subtitle
    pub fn banner(&self) -> Style {
        Style::default()
            .fg(self.accent())
            .add_modifier(Modifier::ITALIC)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.highlight())
    }

    // === Tabs ===

    /// Style of a tab button; selection and highlight are independent
    pub fn tab(&self, selected: bool, highlighted: bool) -> Style {
        match (selected, highlighted) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(self.highlight())
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(Color::Black)
                .bg(self.accent())
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .fg(self.highlight())
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(self.muted()),
        }
    }

    pub fn tab_separator(&self) -> Style {
        Style::default().fg(self.muted())
    }

    // === Content ===

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted())
    }

    pub fn border_title(&self) -> Style {
        Style::default()
            .fg(self.accent())
            .add_modifier(Modifier::BOLD)
    }

    pub fn view_heading(&self) -> Style {
        Style::default()
            .fg(self.text())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn view_body(&self) -> Style {
        Style::default().fg(self.text())
    }

    pub fn view_hint(&self) -> Style {
        Style::default()
            .fg(self.muted())
            .add_modifier(Modifier::ITALIC)
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
