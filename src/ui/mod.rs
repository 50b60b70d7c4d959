// UI module
// Terminal lifecycle, event loop and views for the segmented tabs demo

pub mod app_view;
pub mod haptics;
pub mod styles;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::warn;

use crate::constants::{ANIMATION_POLL, IDLE_POLL};
use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use haptics::TerminalBell;
pub use styles::Styles;

pub type DemoTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Run `undo` when `result` is an error, then hand the result back unchanged
fn undo_on_error<T, E>(result: Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    if result.is_err() {
        undo();
    }
    result
}

fn leave_raw_mode() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "failed to disable raw mode");
    }
}

/// Raw mode, alternate screen and mouse capture. Raw mode is switched back off
/// if any later step fails.
pub fn setup_terminal() -> Result<DemoTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    undo_on_error(
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture),
        leave_raw_mode,
    )
    .context("Failed to enter alternate screen")?;
    let terminal = undo_on_error(Terminal::new(CrosstermBackend::new(stdout)), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        leave_raw_mode();
    })?;
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut DemoTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the main application event loop
pub fn run_app(terminal: &mut DemoTerminal, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();

        // Render the UI
        terminal.draw(|f| render_app(f, app, now))?;

        // Redraw quickly while the highlight slides
        let timeout = if app.control.is_animating(now) {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };

        // Handle events
        if event::poll(timeout)? {
            let app_event = EventHandler::handle(event::read()?);
            app.handle_event(app_event, Instant::now());
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
