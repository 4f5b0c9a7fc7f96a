//! Terminal mode setup with guaranteed teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument, warn};

/// Raw mode, alternate screen and mouse capture, undone on drop.
///
/// Teardown runs on early returns, errors, and panics that unwind.
pub struct TerminalGuard<W: Write> {
    writer: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Switches the terminal into UI mode, writing control sequences to `writer`.
    #[instrument(skip_all)]
    pub fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            writer,
            active: true,
        };
        execute!(guard.writer, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal in UI mode");
        Ok(guard)
    }

    /// Restores the terminal. Only the first call has any effect.
    pub fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %e, "Failed to restore screen");
        }
        debug!("Terminal restored");
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        self.restore();
    }
}
