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

//! Command-line arguments.
//!
//! Arguments only override the configuration for the current session, they
//! are never written back to the configuration file.

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "songlist")]
#[command(version, about = "Browse song search results in the terminal", long_about = None)]
pub(crate) struct Cli {
    /// Search term, overrides the configured term
    term: Vec<String>,

    /// Maximum number of results to request
    #[arg(short, long)]
    limit: Option<u32>,
}

impl Cli {
    fn search_term(&self) -> Option<String> {
        (!self.term.is_empty()).then(|| self.term.join(" "))
    }

    pub(crate) fn apply(&self, config: AppConfig) -> AppConfig {
        config
            .with_search_term(self.search_term())
            .with_result_limit(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keep_the_configuration() {
        let cli = Cli::try_parse_from(["songlist"]).unwrap();
        assert_eq!(cli.apply(AppConfig::default()), AppConfig::default());
    }

    #[test]
    fn words_are_joined_into_one_term() {
        let cli = Cli::try_parse_from(["songlist", "the", "national", "--limit", "5"]).unwrap();
        let config = cli.apply(AppConfig::default());
        assert_eq!(config.search_term, "the national");
        assert_eq!(config.result_limit, 5);
    }

    #[test]
    fn rejects_non_numeric_limit() {
        assert!(Cli::try_parse_from(["songlist", "--limit", "lots"]).is_err());
    }
}
