use ratatui::{buffer::Buffer, layout::Rect};

use super::{render_text_view, SimulationView};
use crate::ui::Styles;

const BODY: &[&str] = &[
    "Completed simulations and the debrief reports recorded for them.",
    "Reports summarize participant performance against the scenario objectives.",
];

/// Finished simulations with their debriefs
pub struct SimulationHistory;

impl SimulationView for SimulationHistory {
    fn title(&self) -> &'static str {
        "Completed Runs"
    }

    fn render(&self, area: Rect, buf: &mut Buffer, styles: &Styles) {
        render_text_view(
            area,
            buf,
            styles,
            self.title(),
            BODY,
            Some("Reports are kept after a simulation is reset."),
        );
    }
}
