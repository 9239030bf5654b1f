// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{Header, Styles, TabBar, HEADER_HEIGHT};
use crate::config::AppConfig;
use crate::constants::FOOTER_HELP;
use crate::core::App;
use crate::views::view_for;

/// Areas produced by one render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Row holding the tab buttons (used for click detection)
    pub tabs: Rect,
    /// Inside of the content box where the mounted view draws
    pub view: Rect,
    pub footer: Rect,
}

/// Render the entire application from the current selection
pub fn render_app(f: &mut Frame, app: &App, config: &AppConfig) -> AppLayout {
    let styles = Styles::new(config.ui.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Length(1),             // Tab row
            Constraint::Min(0),                // Mounted view
            Constraint::Length(3),             // Footer
        ])
        .split(f.area());

    f.render_widget(Header::new(&config.application.header, styles), chunks[0]);

    let tab_bar = TabBar::new(app.selected(), styles);
    f.render_widget(&tab_bar, chunks[1]);

    let view = render_content(f, app, &styles, chunks[2]);
    render_footer(f, &styles, chunks[3]);

    AppLayout {
        header: chunks[0],
        tabs: chunks[1],
        view,
        footer: chunks[3],
    }
}

/// Render the content box and exactly one mounted view inside it
fn render_content(f: &mut Frame, app: &App, styles: &Styles, area: Rect) -> Rect {
    let descriptor = app.selected().descriptor();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles.border())
        .title(Span::styled(format!(" {} ", descriptor.label), styles.border_title()))
        .padding(ratatui::widgets::Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);

    f.render_widget(block, area);
    view_for(app.selected()).render(inner, f.buffer_mut(), styles);

    inner
}

/// Render the footer bar
fn render_footer(f: &mut Frame, styles: &Styles, area: Rect) {
    let footer = Paragraph::new(FOOTER_HELP)
        .style(styles.footer())
        .block(Block::default().borders(Borders::ALL).border_style(styles.border()));
    f.render_widget(footer, area);
}
