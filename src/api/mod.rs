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

//! Search API client.
//!
//! This module issues the single outbound request behind the song list: an
//! HTTP GET against the configured search endpoint with a fixed search term
//! and result limit. The JSON body is mapped to [`Song`] records in response
//! order.
//!
//! The client is blocking, it is only ever driven from the background task
//! worker so the UI thread is never held up by network I/O.

mod error;

pub(crate) use error::FetchError;

use log::{debug, warn};
use reqwest::{Url, blocking::Client};

use crate::{
    config::AppConfig,
    model::{SearchResponse, Song},
};

pub(crate) struct SearchClient {
    client: Client,
    url: Url,
}

impl SearchClient {
    /// Creates a client for the search configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the underlying
    /// HTTP client cannot be constructed.
    pub(crate) fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            url: search_url(config)?,
        })
    }

    /// Performs one fetch and returns the retrieved songs.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails or the body is not a
    /// valid search response. The HTTP status is not checked, an error reply
    /// is parsed like any other body.
    pub(crate) fn fetch_results(&self) -> Result<Vec<Song>, FetchError> {
        debug!("Fetching {}", self.url);

        let response = self.client.get(self.url.clone()).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Search API answered {status}, parsing the body regardless");
        }

        let body = response.text()?;
        parse_results(&body)
    }
}

/// Builds the search URL, `{endpoint}?term=..&limit=..`.
pub(crate) fn search_url(config: &AppConfig) -> Result<Url, FetchError> {
    let limit = config.result_limit.to_string();
    Url::parse_with_params(
        &config.endpoint,
        [("term", config.search_term.as_str()), ("limit", limit.as_str())],
    )
    .map_err(|e| FetchError::InvalidEndpoint(format!("{}: {}", config.endpoint, e)))
}

/// Maps a response body to songs, a body without `results` yields none.
pub(crate) fn parse_results(body: &str) -> Result<Vec<Song>, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.into_songs())
}
