//! Terminal setup and teardown

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

pub type Backend = CrosstermBackend<Stdout>;

/// Owns the terminal while the TUI runs
pub struct Tui {
    terminal: Terminal<Backend>,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal =
            Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    /// Switch to raw mode and the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        self.terminal.clear()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal to its normal state
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }

    /// Wait up to `timeout` for an input event
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            return Ok(Some(event::read()?));
        }
        Ok(None)
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<Backend> {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
