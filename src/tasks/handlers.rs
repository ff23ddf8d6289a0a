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

use anyhow::Result;
use log::{error, info};

use crate::{events::AppEvent, tasks::TaskContext};

/// Fetches a fresh result set and hands it to the UI.
///
/// A failed fetch is logged and reported as [`AppEvent::FetchFailed`], which
/// only settles the view. The returned error is reserved for the event channel
/// being closed.
pub(super) fn fetch_results(ctx: &TaskContext) -> Result<()> {
    let outcome = match ctx.client {
        Some(client) => client.fetch_results().map_err(|e| e.to_string()),
        None => Err("search client unavailable".to_string()),
    };

    let event = match outcome {
        Ok(songs) => {
            info!("Retrieved {} songs", songs.len());
            AppEvent::ResultsReady(songs)
        }
        Err(e) => {
            error!("Failed to fetch songs: {e}");
            AppEvent::FetchFailed(e)
        }
    };

    ctx.event_tx.send(event)?;

    Ok(())
}
