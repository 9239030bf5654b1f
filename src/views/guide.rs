use ratatui::{buffer::Buffer, layout::Rect};

use super::{render_text_view, SimulationView};
use crate::ui::Styles;

const BODY: &[&str] = &[
    "1. Pick a scenario under Templates and launch it for your program.",
    "2. Follow the running session under Active Simulations.",
    "3. Reset or complete the session when the exercise ends.",
    "4. Review the debrief under Debrief Reports with your participants.",
];

/// Step-by-step instructions for instructors
pub struct SimulationGuide;

impl SimulationView for SimulationGuide {
    fn title(&self) -> &'static str {
        "How To Run A Simulation"
    }

    fn render(&self, area: Rect, buf: &mut Buffer, styles: &Styles) {
        render_text_view(area, buf, styles, self.title(), BODY, None);
    }
}
