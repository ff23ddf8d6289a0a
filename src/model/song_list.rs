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

//! Song list state.
//!
//! This module holds the data behind the song list screen: the last
//! successfully retrieved result set, and the flags tracking the initial load
//! and user-initiated refreshes.
//!
//! The list moves through `Loading -> Ready` once, and `Ready -> Refreshing ->
//! Ready` for every refresh. A failed fetch settles into `Ready` exactly like a
//! successful one, it just leaves the items alone.

use crate::model::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListStatus {
    Loading,
    Refreshing,
    Ready,
}

/// Identifies a row across a change of list contents.
///
/// Records carry a `trackId` in the normal case. One without falls back to
/// its row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowKey {
    Track(i64),
    Index(usize),
}

#[derive(Debug)]
pub(crate) struct SongList {
    items: Vec<Song>,
    is_loading: bool,
    is_refreshing: bool,
}

impl SongList {
    pub(crate) fn new() -> Self {
        Self {
            items: vec![],
            is_loading: true,
            is_refreshing: false,
        }
    }

    pub(crate) fn items(&self) -> &[Song] {
        &self.items
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub(crate) fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    pub(crate) fn status(&self) -> ListStatus {
        if self.is_loading {
            ListStatus::Loading
        } else if self.is_refreshing {
            ListStatus::Refreshing
        } else {
            ListStatus::Ready
        }
    }

    /// Track ids in display order.
    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<i64> {
        self.items.iter().filter_map(|s| s.track_id).collect()
    }

    pub(crate) fn key_at(&self, index: usize) -> Option<RowKey> {
        let song = self.items.get(index)?;
        Some(song.track_id.map_or(RowKey::Index(index), RowKey::Track))
    }

    pub(crate) fn position_of(&self, key: RowKey) -> Option<usize> {
        match key {
            RowKey::Track(id) => self.items.iter().position(|s| s.track_id == Some(id)),
            RowKey::Index(index) => self
                .items
                .get(index)
                .filter(|s| s.track_id.is_none())
                .map(|_| index),
        }
    }

    pub(crate) fn begin_refresh(&mut self) {
        self.is_refreshing = true;
    }

    /// Replaces the whole list with a freshly fetched result set.
    pub(crate) fn set_results(&mut self, songs: Vec<Song>) {
        self.items = songs;
        self.settle();
    }

    /// Settles a failed fetch, the current items are kept.
    pub(crate) fn fetch_failed(&mut self) {
        self.settle();
    }

    fn settle(&mut self) {
        self.is_loading = false;
        self.is_refreshing = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn song(id: i64) -> Song {
        Song {
            track_id: Some(id),
            track_name: format!("Track {id}"),
            artist_name: format!("Artist {id}"),
            artwork_url: format!("https://example.com/{id}.jpg"),
        }
    }

    pub(crate) fn songs(ids: &[i64]) -> Vec<Song> {
        ids.iter().copied().map(song).collect()
    }

    #[test]
    fn starts_loading_and_empty() {
        let list = SongList::new();
        assert_eq!(list.status(), ListStatus::Loading);
        assert!(list.is_loading());
        assert!(!list.is_refreshing());
        assert!(list.items().is_empty());
    }

    #[test]
    fn mount_with_three_records() {
        let mut list = SongList::new();
        list.set_results(songs(&[30, 10, 20]));

        assert_eq!(list.status(), ListStatus::Ready);
        assert_eq!(list.keys(), vec![30, 10, 20]);
    }

    #[test]
    fn mount_failure_leaves_empty_ready_list() {
        let mut list = SongList::new();
        list.fetch_failed();

        assert_eq!(list.status(), ListStatus::Ready);
        assert!(!list.is_loading());
        assert!(!list.is_refreshing());
        assert!(list.items().is_empty());
    }

    #[test]
    fn refresh_replaces_the_whole_list() {
        let mut list = SongList::new();
        list.set_results(songs(&[1, 2, 3]));

        list.begin_refresh();
        assert_eq!(list.status(), ListStatus::Refreshing);
        assert_eq!(list.keys(), vec![1, 2, 3]);

        list.set_results(songs(&[4, 5, 6, 7, 8]));
        assert_eq!(list.status(), ListStatus::Ready);
        assert_eq!(list.keys(), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn failed_refresh_keeps_previous_items() {
        let mut list = SongList::new();
        list.set_results(songs(&[1, 2, 3]));

        list.begin_refresh();
        list.fetch_failed();

        assert_eq!(list.status(), ListStatus::Ready);
        assert!(!list.is_refreshing());
        assert_eq!(list.keys(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_result_set_clears_the_list() {
        let mut list = SongList::new();
        list.set_results(songs(&[1, 2]));
        list.begin_refresh();
        list.set_results(vec![]);

        assert!(list.items().is_empty());
        assert_eq!(list.status(), ListStatus::Ready);
    }

    #[test]
    fn finds_rows_by_key() {
        let mut list = SongList::new();
        list.set_results(songs(&[5, 9, 2]));
        assert_eq!(list.position_of(RowKey::Track(9)), Some(1));
        assert_eq!(list.position_of(RowKey::Track(4)), None);
    }

    #[test]
    fn keyless_record_is_keyed_by_row() {
        let mut keyless = song(0);
        keyless.track_id = None;
        keyless.track_name = String::new();

        let mut list = SongList::new();
        list.set_results(vec![song(1), keyless, song(2)]);

        assert_eq!(list.items().len(), 3);
        assert_eq!(list.key_at(0), Some(RowKey::Track(1)));
        assert_eq!(list.key_at(1), Some(RowKey::Index(1)));
        assert_eq!(list.key_at(3), None);
        assert_eq!(list.position_of(RowKey::Index(1)), Some(1));
        assert_eq!(list.position_of(RowKey::Index(0)), None);
        assert_eq!(list.position_of(RowKey::Index(7)), None);
    }
}
