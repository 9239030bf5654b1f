use ratatui::{buffer::Buffer, layout::Rect};

use super::{render_text_view, SimulationView};
use crate::ui::Styles;

const BODY: &[&str] = &[
    "Reusable scenarios that can be launched as a new simulation.",
    "A template captures the patient set, the learning objectives and the expected duration.",
];

/// Library of reusable simulation scenarios
pub struct SimulationTemplates;

impl SimulationView for SimulationTemplates {
    fn title(&self) -> &'static str {
        "Scenario Library"
    }

    fn render(&self, area: Rect, buf: &mut Buffer, styles: &Styles) {
        render_text_view(area, buf, styles, self.title(), BODY, None);
    }
}
