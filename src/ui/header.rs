// Header Block
// Static title, subtitle and informational banner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::Styles;
use crate::config::HeaderConfig;

/// Rows taken by the header including its border
pub const HEADER_HEIGHT: u16 = 5;

pub struct Header<'a> {
    config: &'a HeaderConfig,
    styles: Styles,
}

impl<'a> Header<'a> {
    pub fn new(config: &'a HeaderConfig, styles: Styles) -> Self {
        Self { config, styles }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The banner is informational only; nothing here gates access
        let lines = vec![
            Line::from(Span::styled(self.config.title.clone(), self.styles.header_title())),
            Line::from(Span::styled(self.config.subtitle.clone(), self.styles.header_subtitle())),
            Line::from(Span::styled(format!("Note: {}", self.config.banner), self.styles.banner())),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.styles.border())
                    .padding(ratatui::widgets::Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_renders_all_texts() {
        let config = HeaderConfig::default();
        let area = Rect { x: 0, y: 0, width: 90, height: HEADER_HEIGHT };
        let mut buf = Buffer::empty(area);
        Header::new(&config, Styles::default()).render(area, &mut buf);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();

        assert!(rows[1].contains(&config.title));
        assert!(rows[2].contains(&config.subtitle));
        assert!(rows[3].contains(&config.banner));
    }
}
