// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::SimulationTab;

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Jump directly to a tab
    Select(SimulationTab),

    /// Move to the tab on the right
    NextTab,

    /// Move to the tab on the left
    PreviousTab,

    /// Left click at a terminal cell
    Click { column: u16, row: u16 },

    /// Terminal was resized
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Direct selection by position
            KeyCode::Char(c) if c.is_ascii_digit() => c
                .to_digit(10)
                .and_then(|d| SimulationTab::from_position(d as usize))
                .map(AppEvent::Select)
                .unwrap_or(AppEvent::None),

            // Navigation
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => AppEvent::NextTab,
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => AppEvent::PreviousTab,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}
