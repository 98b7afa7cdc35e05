//! Terminal lifecycle wrapper
//!
//! Owns raw mode, the alternate screen, and tick-based event polling so the
//! rest of the app only ever sees `Event`s and a draw closure.

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

/// Wraps the ratatui terminal together with the event poll timeout.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl Tui {
    /// Create a terminal wrapper polling events with the given timeout
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    /// Switch to the alternate screen and enable raw mode.
    ///
    /// Must run before the first draw.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal. Also runs on Drop, so a panic does not leave
    /// the shell in raw mode.
    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }

    /// Wait up to one tick for an event.
    ///
    /// `None` means the tick elapsed with no input. Key release events are
    /// dropped so Windows terminals do not double-fire every press.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }

        let ev = event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
        }
        Ok(Some(ev))
    }

    /// Render a frame via the provided closure
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
