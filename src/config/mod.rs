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

//! Application configuration.
//!
//! This module manages the application configuration file: which search
//! endpoint to query, the fixed search parameters, and where diagnostics are
//! written.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "songlist";

const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";
const DEFAULT_SEARCH_TERM: &str = "taylor swift";
const DEFAULT_RESULT_LIMIT: u32 = 15;

const DEFAULT_LOG_FILE: &str = "songlist.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub version: u32,
    pub endpoint: String,
    pub search_term: String,
    pub result_limit: u32,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            request_timeout_secs: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Request timeout, `None` leaves requests pending indefinitely.
    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(file) => PathBuf::from(file),
            None => std::env::temp_dir().join(DEFAULT_LOG_FILE),
        }
    }

    /// Replaces the configured search term with one given on the command
    /// line, blank terms are ignored.
    pub(crate) fn with_search_term(mut self, term: Option<String>) -> Self {
        if let Some(term) = term.filter(|t| !t.trim().is_empty()) {
            self.search_term = term;
        }
        self
    }

    pub(crate) fn with_result_limit(mut self, limit: Option<u32>) -> Self {
        if let Some(limit) = limit {
            self.result_limit = limit;
        }
        self
    }
}

/// Loads the configuration file, creating it with defaults on first start.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
