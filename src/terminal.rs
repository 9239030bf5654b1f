// Terminal setup and teardown
// Raw mode, alternate screen and mouse capture, undone on error and on panic

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run `step`; if it fails, run `rollback` before handing back the error
pub fn rollback_on_error<T, E>(
    step: impl FnOnce() -> Result<T, E>,
    rollback: impl FnOnce(),
) -> Result<T, E> {
    let result = step();
    if result.is_err() {
        rollback();
    }
    result
}

/// Enter raw mode and the alternate screen. Any failure after raw mode is
/// enabled resets the terminal before returning.
pub fn init_terminal(mouse_enabled: bool) -> io::Result<TuiTerminal> {
    enable_raw_mode()?;

    rollback_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            if mouse_enabled {
                execute!(stdout, EnableMouseCapture)?;
            }
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || reset_terminal(mouse_enabled),
    )
}

/// Restore the terminal after a normal shutdown
pub fn restore_terminal(terminal: &mut TuiTerminal, mouse_enabled: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Best-effort reset used on failed setup and from the panic hook
pub fn reset_terminal(mouse_enabled: bool) {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    if mouse_enabled {
        let _ = execute!(stdout, DisableMouseCapture);
    }
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}

/// Reset the terminal before the default panic message is printed
pub fn install_panic_hook(mouse_enabled: bool) {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset_terminal(mouse_enabled);
        original(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_rollback_runs_on_failure() {
        let rolled_back = Cell::new(false);
        let result: Result<(), io::Error> = rollback_on_error(
            || Err(io::Error::new(io::ErrorKind::Other, "alternate screen unavailable")),
            || rolled_back.set(true),
        );
        assert!(result.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn test_rollback_skipped_on_success() {
        let rolled_back = Cell::new(false);
        let result: Result<u8, io::Error> = rollback_on_error(|| Ok(7), || rolled_back.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!rolled_back.get());
    }
}
