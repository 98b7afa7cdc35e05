//! tablesift - a terminal viewer that shows/hides table rows by status
//!
//! Loads a CSV table whose second column is a status value and filters rows
//! by equality against a selected status, with `all` showing every row.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let source_arg = std::env::args().nth(1).map(PathBuf::from);

    let mut tui = Tui::new(TICK_RATE)?;
    tui.enter()?;

    let mut app = App::new(source_arg);
    app.init()?;

    let result = run(&mut tui, &mut app);
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
    Ok(())
}

/// Event loop: draw, poll, translate events to actions, apply them.
fn run(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Updates may chain into follow-up actions
        let mut next = action;
        while let Some(a) = next {
            next = app.update(a)?;
        }
    }

    Ok(())
}
