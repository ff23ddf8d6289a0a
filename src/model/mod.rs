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

//! Domain models and core data structures.
//!
//! This module defines the song records returned by the search API and the
//! envelope they arrive in.

pub(crate) mod song_list;

use serde::{Deserialize, Deserializer};

/// A single song record, one row in the song list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Absent for results that are not tracks, such as audiobooks.
    #[serde(default)]
    pub track_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub track_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist_name: String,
    #[serde(
        default,
        rename = "artworkUrl100",
        alias = "artworkUrl",
        deserialize_with = "null_as_empty"
    )]
    pub artwork_url: String,
}

/// Search API response body.
///
/// Only the `results` array is used, anything else in the payload is
/// ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) results: Option<Vec<Song>>,
}

impl SearchResponse {
    pub(crate) fn into_songs(self) -> Vec<Song> {
        self.results.unwrap_or_default()
    }
}

// Text fields are not validated, a missing or null value renders as a gap.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
