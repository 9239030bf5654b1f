// Tab Bar Component
// Row of tab buttons built from the fixed descriptor list, with click detection

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::Styles;
use crate::core::{descriptors, SimulationTab, TabDescriptor};

/// Separator drawn between two buttons
const SEPARATOR: &str = "│";

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

pub struct TabBar {
    pub selected: SimulationTab,
    pub styles: Styles,
}

impl TabBar {
    pub fn new(selected: SimulationTab, styles: Styles) -> Self {
        Self { selected, styles }
    }

    /// Full buttons show icon and label; compact buttons only the icon
    fn button_text(descriptor: &TabDescriptor, compact: bool) -> String {
        if compact {
            format!(" {} ", descriptor.icon)
        } else {
            format!(" {} {} ", descriptor.icon, descriptor.label)
        }
    }

    /// Columns needed to draw every button in the given form
    fn line_width(compact: bool) -> u16 {
        let separators = Span::raw(SEPARATOR).width() * (descriptors().len() - 1);
        let buttons: usize = descriptors()
            .iter()
            .map(|d| Span::raw(Self::button_text(d, compact)).width())
            .sum();
        (separators + buttons) as u16
    }

    /// Narrowest row that still shows all four buttons
    pub fn min_width() -> u16 {
        Self::line_width(true)
    }

    /// Switch to icon-only buttons when the labels do not fit
    fn is_compact(width: u16) -> bool {
        width < Self::line_width(false)
    }

    fn button_span(&self, descriptor: &TabDescriptor, compact: bool) -> Span<'static> {
        let selected = descriptor.tab == self.selected;
        Span::styled(
            Self::button_text(descriptor, compact),
            self.styles.tab(selected, descriptor.highlighted),
        )
    }

    /// Build the tab line in descriptor order for a row of `width` columns
    pub fn build_line(&self, width: u16) -> Line<'static> {
        let compact = Self::is_compact(width);
        let mut spans = Vec::new();
        for (idx, descriptor) in descriptors().iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(SEPARATOR, self.styles.tab_separator()));
            }
            spans.push(self.button_span(descriptor, compact));
        }
        Line::from(spans)
    }

    /// Calculate the bounds of each button when the bar is drawn into `area`.
    /// Below `min_width()` the later buttons are clipped or dropped.
    pub fn calculate_tab_bounds(area: Rect) -> Vec<(SimulationTab, TabBounds)> {
        if area.width == 0 || area.height == 0 {
            return Vec::new();
        }

        let compact = Self::is_compact(area.width);
        let right_edge = area.x.saturating_add(area.width);
        let separator_width = Span::raw(SEPARATOR).width() as u16;
        let mut bounds = Vec::new();
        let mut current_x = area.x;

        for (idx, descriptor) in descriptors().iter().enumerate() {
            if idx > 0 {
                current_x = current_x.saturating_add(separator_width);
            }
            if current_x >= right_edge {
                break;
            }

            let tab_width = Span::raw(Self::button_text(descriptor, compact)).width() as u16;
            let visible_width = tab_width.min(right_edge - current_x);

            bounds.push((
                descriptor.tab,
                TabBounds {
                    x: current_x,
                    y: area.y,
                    width: visible_width,
                    height: 1,
                },
            ));

            current_x = current_x.saturating_add(tab_width);
        }

        bounds
    }

    /// Get the tab at the given coordinates (for click handling)
    /// Returns None if no tab was clicked
    pub fn tab_at(area: Rect, x: u16, y: u16) -> Option<SimulationTab> {
        Self::calculate_tab_bounds(area)
            .into_iter()
            .find(|(_, b)| b.contains(x, y))
            .map(|(tab, _)| tab)
    }
}

impl Widget for &TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.build_line(area.width), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn bar_area() -> Rect {
        Rect { x: 2, y: 6, width: 100, height: 1 }
    }

    fn render_bar(selected: SimulationTab) -> Buffer {
        let mut buf = Buffer::empty(Rect { x: 0, y: 0, width: 110, height: 10 });
        let bar = TabBar::new(selected, Styles::default());
        (&bar).render(bar_area(), &mut buf);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_bounds_follow_descriptor_order() {
        let bounds = TabBar::calculate_tab_bounds(bar_area());
        let order: Vec<SimulationTab> = bounds.iter().map(|(tab, _)| *tab).collect();
        assert_eq!(order, SimulationTab::ALL.to_vec());

        for pair in bounds.windows(2) {
            let (_, left) = pair[0];
            let (_, right) = pair[1];
            assert_eq!(left.x + left.width + 1, right.x);
        }
        assert_eq!(bounds[0].1.x, 2);
    }

    #[test]
    fn test_tab_at_resolves_each_button() {
        let area = bar_area();
        for (tab, b) in TabBar::calculate_tab_bounds(area) {
            assert_eq!(TabBar::tab_at(area, b.x, b.y), Some(tab));
            assert_eq!(TabBar::tab_at(area, b.x + b.width - 1, b.y), Some(tab));
        }
    }

    #[test]
    fn test_tab_at_misses() {
        let area = bar_area();
        let bounds = TabBar::calculate_tab_bounds(area);

        // Separator between the first two buttons
        let (_, first) = bounds[0];
        assert_eq!(TabBar::tab_at(area, first.x + first.width, area.y), None);

        // Other rows and left of the bar
        assert_eq!(TabBar::tab_at(area, first.x, area.y + 1), None);
        assert_eq!(TabBar::tab_at(area, 0, area.y), None);

        // Right of the last button
        let (_, last) = bounds[3];
        assert_eq!(TabBar::tab_at(area, last.x + last.width, area.y), None);
    }

    #[test]
    fn test_narrow_area_keeps_all_buttons() {
        let area = Rect { x: 0, y: 0, width: 30, height: 1 };
        let bounds = TabBar::calculate_tab_bounds(area);
        let order: Vec<SimulationTab> = bounds.iter().map(|(tab, _)| *tab).collect();
        assert_eq!(order, SimulationTab::ALL.to_vec());
        for (tab, b) in &bounds {
            assert_eq!(b.width, 3);
            assert_eq!(TabBar::tab_at(area, b.x + 1, b.y), Some(*tab));
        }

        let mut buf = Buffer::empty(area);
        let bar = TabBar::new(SimulationTab::History, Styles::default());
        (&bar).render(area, &mut buf);
        let text = row_text(&buf, 0);
        for descriptor in descriptors() {
            assert!(text.contains(descriptor.icon));
            assert!(!text.contains(descriptor.label));
        }
        let marked: Vec<SimulationTab> = bounds
            .iter()
            .filter(|(_, b)| buf[(b.x, b.y)].bg != Color::Reset)
            .map(|(tab, _)| *tab)
            .collect();
        assert_eq!(marked, vec![SimulationTab::History]);
    }

    #[test]
    fn test_minimum_width() {
        let min = TabBar::min_width();
        assert_eq!(min, 15);

        let fits = TabBar::calculate_tab_bounds(Rect { x: 0, y: 0, width: min, height: 1 });
        assert_eq!(fits.len(), 4);
        assert!(fits.iter().all(|(_, b)| b.width == 3));

        let clipped = TabBar::calculate_tab_bounds(Rect { x: 0, y: 0, width: min - 1, height: 1 });
        assert_eq!(clipped.len(), 4);
        assert_eq!(clipped[3].1.width, 2);

        assert!(TabBar::calculate_tab_bounds(Rect::default()).is_empty());
    }

    #[test]
    fn test_full_labels_from_77_columns() {
        let full = TabBar::calculate_tab_bounds(Rect { x: 0, y: 0, width: 77, height: 1 });
        assert_eq!(full[0].1.width, 22);
        let compact = TabBar::calculate_tab_bounds(Rect { x: 0, y: 0, width: 76, height: 1 });
        assert_eq!(compact[0].1.width, 3);
    }

    #[test]
    fn test_render_shows_labels_in_order() {
        let buf = render_bar(SimulationTab::Active);
        let text = row_text(&buf, 6);

        let positions: Vec<usize> = ["Active Simulations", "Templates", "Debrief Reports", "Instructor Guide"]
            .iter()
            .map(|label| text.find(label).expect("label rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exactly_one_button_selected() {
        let styles = Styles::default();
        for selected in SimulationTab::ALL {
            let buf = render_bar(selected);
            let marked: Vec<SimulationTab> = TabBar::calculate_tab_bounds(bar_area())
                .into_iter()
                .filter(|(_, b)| buf[(b.x, b.y)].bg != Color::Reset)
                .map(|(tab, _)| tab)
                .collect();
            assert_eq!(marked, vec![selected]);

            let d = selected.descriptor();
            let (_, b) = TabBar::calculate_tab_bounds(bar_area())[selected.index()];
            assert_eq!(Some(buf[(b.x, b.y)].bg), styles.tab(true, d.highlighted).bg);
        }
    }

    #[test]
    fn test_guide_highlight_independent_of_selection() {
        let styles = Styles::default();
        let (_, guide) = TabBar::calculate_tab_bounds(bar_area())[SimulationTab::Guide.index()];

        let unselected = render_bar(SimulationTab::Active);
        assert_eq!(Some(unselected[(guide.x, guide.y)].fg), styles.tab(false, true).fg);

        let selected = render_bar(SimulationTab::Guide);
        let cell = &selected[(guide.x, guide.y)];
        assert_eq!(Some(cell.fg), styles.tab(true, true).fg);
        assert_eq!(Some(cell.bg), styles.tab(true, true).bg);
        assert_ne!(styles.tab(true, true), styles.tab(true, false));
    }

    #[test]
    fn test_render_into_empty_area_is_noop() {
        let mut buf = Buffer::empty(Rect { x: 0, y: 0, width: 10, height: 2 });
        let bar = TabBar::new(SimulationTab::Active, Styles::default());
        (&bar).render(Rect::default(), &mut buf);
        assert_eq!(buf, Buffer::empty(Rect { x: 0, y: 0, width: 10, height: 2 }));
    }
}
