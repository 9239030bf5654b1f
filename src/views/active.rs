use ratatui::{buffer::Buffer, layout::Rect};

use super::{render_text_view, SimulationView};
use crate::ui::Styles;

const BODY: &[&str] = &[
    "Simulations that are currently running appear here.",
    "Each entry shows the scenario, the assigned program and the room it runs in.",
    "Instructors only see simulations for the programs they are assigned to.",
];

/// Running simulation sessions
pub struct ActiveSimulations;

impl SimulationView for ActiveSimulations {
    fn title(&self) -> &'static str {
        "Running Sessions"
    }

    fn render(&self, area: Rect, buf: &mut Buffer, styles: &Styles) {
        render_text_view(
            area,
            buf,
            styles,
            self.title(),
            BODY,
            Some("Start a new session from the Templates tab."),
        );
    }
}
