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

use thiserror::Error;

/// Everything that can go wrong retrieving a result set.
///
/// The variants only exist for diagnostics, callers treat every one of them
/// the same way.
#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("Failed to build search request: {0}")]
    InvalidEndpoint(String),

    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed search response: {0}")]
    Malformed(#[from] serde_json::Error),
}
