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
use log::debug;

use crate::{App, model::Song, tasks::AppTask};

/// Queues a fetch on the task worker, the outcome arrives later as an event.
pub(super) fn fetch_results(app: &mut App) -> Result<()> {
    app.task_tx.send(AppTask::FetchResults)?;

    Ok(())
}

pub(super) fn handle_refresh(app: &mut App) -> Result<()> {
    if app.songs.is_loading() {
        return Ok(());
    }

    if app.songs.is_refreshing() {
        debug!("Refresh requested while another is in flight");
    }

    app.songs.begin_refresh();
    fetch_results(app)
}

pub(super) fn handle_results_ready(app: &mut App, songs: Vec<Song>) {
    let selected = app.song_list_view.selected_key(&app.songs);
    app.songs.set_results(songs);
    app.song_list_view.restore_selection(&app.songs, selected);
}

pub(super) fn handle_fetch_failed(app: &mut App, reason: &str) {
    debug!("Keeping {} songs after failed fetch: {reason}", app.songs.items().len());
    app.songs.fetch_failed();
}

pub(super) fn handle_tick(app: &mut App) {
    app.ticks = app.ticks.wrapping_add(1);
}
