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

//! Input routing.
//!
//! Terminal input is offered to the song list first, and anything it does not
//! consume is checked against the global application keys.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::{App, components::SongListAction, events::AppEvent};

/// Maps keyboard input to application actions.
///
/// # Errors
///
/// Returns an error if an event fails to send on the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let action = app
        .song_list_view
        .process_event(&Event::Key(key), &app.songs);
    if let Some(action) = action {
        return process_song_list_action(app, action);
    }

    process_global_key_event(app, key)
}

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    let action = app
        .song_list_view
        .process_event(&Event::Mouse(mouse), &app.songs);
    match action {
        Some(action) => process_song_list_action(app, action),
        None => Ok(()),
    }
}

fn process_song_list_action(app: &mut App, action: SongListAction) -> Result<()> {
    match action {
        SongListAction::Refresh => app.event_tx.send(AppEvent::Refresh)?,
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _)
        | (KeyCode::Esc, _)
        | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        _ => {}
    }

    Ok(())
}
