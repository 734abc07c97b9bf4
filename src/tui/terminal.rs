//! Terminal mode setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::debug;

/// Holds the terminal in TUI mode until dropped.
///
/// Raw mode is the first thing enabled, so the guard exists before any
/// later setup step can fail and the terminal is restored on every exit
/// path.
#[derive(Debug)]
pub struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    /// Enables raw mode, the alternate screen and, optionally, mouse capture.
    ///
    /// # Errors
    ///
    /// Returns the first failing setup step; whatever was already enabled
    /// is undone before returning.
    pub fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { mouse };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        leave_tui_mode(&mut io::stdout(), self.mouse);
        debug!("Terminal restored");
    }
}

/// Leaves TUI mode. Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W, mouse: bool) {
    let _ = disable_raw_mode();
    if mouse {
        let _ = execute!(writer, DisableMouseCapture);
    }
    let _ = execute!(writer, LeaveAlternateScreen, Show);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_restores_screen_and_cursor() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer, false);
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
        assert!(!written.contains("\x1b[?1000l"));
    }

    #[test]
    fn test_leave_releases_mouse_when_captured() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer, true);
        assert!(String::from_utf8_lossy(&buffer).contains("\x1b[?1000l"));
    }
}
