// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Every state change happens here, on the UI thread, in
//! response to an [`AppEvent`] arriving on the application event channel:
//! input from the terminal, periodic ticks, and results from the background
//! task worker.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, model::Song, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Refresh,

    ResultsReady(Vec<Song>),
    FetchFailed(String),

    Tick,

    ExitApplication,
}

/// Performs the initial load of the song list.
///
/// Must be called exactly once, before the event loop starts.
pub(crate) fn mount(app: &mut App) -> Result<()> {
    fetch_results(app)
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,
        AppEvent::Refresh => handle_refresh(app)?,
        AppEvent::ResultsReady(songs) => handle_results_ready(app, songs),
        AppEvent::FetchFailed(reason) => handle_fetch_failed(app, &reason),
        AppEvent::Tick => handle_tick(app),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
