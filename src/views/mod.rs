// Simulation Views
// The four child views mounted by the tab container, one per tab

mod active;
mod guide;
mod history;
mod templates;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::core::SimulationTab;
use crate::ui::Styles;

pub use active::ActiveSimulations;
pub use guide::SimulationGuide;
pub use history::SimulationHistory;
pub use templates::SimulationTemplates;

/// A parameterless, self-contained view the container can mount
pub trait SimulationView {
    /// Heading shown at the top of the view
    fn title(&self) -> &'static str;

    fn render(&self, area: Rect, buf: &mut Buffer, styles: &Styles);
}

/// The view mounted for a tab. Exhaustive so every tab has exactly one view.
pub fn view_for(tab: SimulationTab) -> &'static dyn SimulationView {
    match tab {
        SimulationTab::Active => &ActiveSimulations,
        SimulationTab::Templates => &SimulationTemplates,
        SimulationTab::History => &SimulationHistory,
        SimulationTab::Guide => &SimulationGuide,
    }
}

/// Render a heading followed by body lines and an optional closing hint
pub(crate) fn render_text_view(
    area: Rect,
    buf: &mut Buffer,
    styles: &Styles,
    title: &'static str,
    body: &[&'static str],
    hint: Option<&'static str>,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(title, styles.view_heading())), Line::from("")];
    lines.extend(
        body.iter()
            .map(|text| Line::from(Span::styled(*text, styles.view_body()))),
    );
    if let Some(hint) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(hint, styles.view_hint())));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_tab_has_a_distinct_view() {
        let titles: HashSet<&str> = SimulationTab::ALL
            .iter()
            .map(|tab| view_for(*tab).title())
            .collect();
        assert_eq!(titles.len(), SimulationTab::ALL.len());
    }

    #[test]
    fn test_view_renders_title() {
        let area = Rect { x: 0, y: 0, width: 60, height: 12 };
        for tab in SimulationTab::ALL {
            let mut buf = Buffer::empty(area);
            let view = view_for(tab);
            view.render(area, &mut buf, &Styles::default());
            let first_row: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
            assert!(first_row.starts_with(view.title()));
        }
    }
}
