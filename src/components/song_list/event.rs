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

//! Input handling for the song list.
//!
//! This module maps raw terminal keyboard and mouse events to list navigation
//! and the refresh gesture. Scrolling the mouse wheel up when the list is
//! already at its first row is treated as a pull past the top, and triggers a
//! refresh.

use crossterm::event::{Event, KeyCode, MouseEventKind};

use crate::{
    components::{SongListAction, SongListView},
    model::song_list::SongList,
};

impl SongListView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        songs: &SongList,
    ) -> Option<SongListAction> {
        // Nothing to interact with until the first result set arrives
        if songs.is_loading() {
            return None;
        }

        let len = songs.items().len();

        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(len),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(len),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

                KeyCode::Char('r') | KeyCode::F(5) => return Some(SongListAction::Refresh),

                _ => {}
            },

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollDown => self.goto_next(len),
                MouseEventKind::ScrollUp if self.is_at_top() => {
                    return Some(SongListAction::Refresh);
                }
                MouseEventKind::ScrollUp => self.goto_previous(len),

                _ => {}
            },

            _ => {}
        }

        None
    }
}
