// Application State
// Selected-tab state for the simulation manager

use tracing::debug;

use super::SimulationTab;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Currently mounted view
    selected: SimulationTab,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Set on every state change; the event loop redraws when it sees it
    needs_redraw: bool,
}

impl App {
    /// Create a freshly mounted container. Always starts on the active simulations.
    pub fn new() -> Self {
        Self {
            selected: SimulationTab::Active,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn selected(&self) -> SimulationTab {
        self.selected
    }

    /// Replace the selected tab and schedule a redraw
    pub fn select(&mut self, tab: SimulationTab) {
        if tab == self.selected {
            return;
        }

        debug!(from = %self.selected, to = %tab, "tab selected");
        self.selected = tab;
        self.needs_redraw = true;
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.next());
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.previous());
    }

    /// Force a redraw on the next loop iteration (e.g. after a resize)
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns whether a redraw is pending and clears the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
