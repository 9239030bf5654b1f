// UI module
// TUI components and views for the simulation manager

pub mod app_view;
pub mod header;
pub mod styles;
pub mod tab_bar;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{App, AppEvent, EventHandler};

pub use app_view::{render_app, AppLayout};
pub use header::{Header, HEADER_HEIGHT};
pub use styles::{Styles, Theme};
pub use tab_bar::{TabBar, TabBounds};

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &AppConfig) -> Result<()> {
    let tick_rate = Duration::from_millis(config.application.tick_rate_ms);
    let mut layout = AppLayout::default();

    info!(tab = %app.selected(), "event loop started");

    loop {
        // Only redraw after a state change or resize
        if app.take_redraw() {
            terminal.draw(|f| layout = render_app(f, app, config))?;
        }

        // Handle events
        if event::poll(tick_rate)? {
            let app_event = EventHandler::handle(event::read()?);
            handle_event(app, app_event, layout.tabs);
        }

        // Check if we should quit
        if app.should_quit {
            info!("event loop finished");
            return Ok(());
        }
    }
}

/// Handle an application event. `tab_area` is the tab row of the last render.
pub fn handle_event(app: &mut App, event: AppEvent, tab_area: Rect) {
    match event {
        AppEvent::Quit => app.quit(),
        AppEvent::Select(tab) => app.select(tab),
        AppEvent::NextTab => app.select_next(),
        AppEvent::PreviousTab => app.select_previous(),
        AppEvent::Click { column, row } => {
            if let Some(tab) = TabBar::tab_at(tab_area, column, row) {
                app.select(tab);
            } else {
                debug!(column, row, "click outside tab row");
            }
        }
        AppEvent::Resize => app.request_redraw(),
        AppEvent::None => {}
    }
}
