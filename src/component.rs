//! Component trait shared by all UI pieces
//!
//! A component turns key events into `Action`s, applies actions to its own
//! state, and renders itself. Cross-component effects always travel as
//! actions through the `App`, never as direct mutation.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// One-time setup after construction. Most components need none.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Translate a key press into an `Action`.
    ///
    /// Local state (cursor position, list selection) may move here, but
    /// anything affecting other components must be returned as an action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Apply an action. May return a follow-up action, which the main loop
    /// feeds back through `App::update`.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`. Rendering only; state changes belong in `update`.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
