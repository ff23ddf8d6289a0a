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

//! Song list view and cursor management.
//!
//! This module provides the scrollable song list. It separates the data being
//! shown ([`SongList`]) from the transient view state held here, the list
//! cursor, and reports gestures that need the rest of the application (a
//! refresh) back to the caller as a [`SongListAction`].

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::song_list::{RowKey, SongList};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SongListAction {
    Refresh,
}

#[derive(Default)]
pub(crate) struct SongListView {
    pub(crate) list_state: ListState,
}

impl SongListView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn selected_key(&self, songs: &SongList) -> Option<RowKey> {
        songs.key_at(self.list_state.selected()?)
    }

    /// Re-applies the cursor after the list contents changed.
    ///
    /// The cursor follows `key` if that row is still in the list, otherwise it
    /// moves to the first row, or nowhere for an empty list.
    pub(crate) fn restore_selection(&mut self, songs: &SongList, key: Option<RowKey>) {
        let index = key
            .and_then(|key| songs.position_of(key))
            .or((!songs.items().is_empty()).then_some(0));

        if index.is_none() {
            *self.list_state.offset_mut() = 0;
        }
        self.list_state.select(index);
    }

    /// Whether the list is scrolled all the way up.
    fn is_at_top(&self) -> bool {
        matches!(self.list_state.selected(), None | Some(0))
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_first(&mut self, len: usize) {
        self.list_state.select((len > 0).then_some(0));
    }

    fn goto_last(&mut self, len: usize) {
        self.list_state.select(len.checked_sub(1));
    }
}
