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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload potentially
//! blocking work, the search API request, from the main UI thread. It
//! provides a dedicated worker loop that translates [`AppTask`] requests into
//! network operations and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Tasks are processed one at a time in the order they were queued, so the
//! results of overlapping fetches reach the UI in the order the fetches were
//! requested.

mod handlers;
use handlers::*;

use anyhow::Result;
use log::{error, warn};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};

use crate::{api::SearchClient, config::AppConfig, events::AppEvent};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppTask {
    FetchResults,
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns the HTTP client and enters a blocking loop, listening for
/// incoming [`AppTask`]s until the task channel is closed or the application
/// stops listening for events.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> JoinHandle<()> {
    let client = match SearchClient::new(config) {
        Ok(client) => Some(client),
        Err(e) => {
            error!("Search client unavailable: {e}");
            None
        }
    };

    thread::spawn(move || {
        let ctx = TaskContext {
            event_tx: &event_tx,
            client: client.as_ref(),
        };

        while let Ok(task) = task_rx.recv() {
            if let Err(e) = handle_task(task, &ctx) {
                warn!("Task worker stopping: {e:#}");
                break;
            }
        }
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    event_tx: &'a Sender<AppEvent>,
    client: Option<&'a SearchClient>,
}

/// Orchestrates the execution of a single task.
fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchResults => fetch_results(ctx),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use super::*;
    use crate::api::tests::{closed_endpoint, serve_once};

    const WAIT: Duration = Duration::from_secs(10);

    fn config_for(endpoint: String) -> AppConfig {
        AppConfig {
            endpoint,
            ..AppConfig::default()
        }
    }

    #[test]
    fn worker_delivers_fetched_songs() {
        let (endpoint, server) = serve_once(
            "200 OK",
            r#"{"results": [{"trackId": 1}, {"trackId": 2}, {"trackId": 3}]}"#,
        );
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = spawn_task_worker(&config_for(endpoint), task_rx, event_tx);
        task_tx.send(AppTask::FetchResults).unwrap();

        match event_rx.recv_timeout(WAIT).unwrap() {
            AppEvent::ResultsReady(songs) => {
                let ids: Vec<i64> = songs.iter().filter_map(|s| s.track_id).collect();
                assert_eq!(ids, vec![1, 2, 3]);
            }
            other => panic!("unexpected event {other:?}"),
        }

        drop(task_tx);
        worker.join().unwrap();
        server.join().unwrap();
    }

    #[test]
    fn worker_reports_missing_results_as_empty() {
        let (endpoint, server) = serve_once("200 OK", r#"{"resultCount": 0}"#);
        let (event_tx, event_rx) = mpsc::channel();
        let client = SearchClient::new(&config_for(endpoint)).unwrap();
        let ctx = TaskContext {
            event_tx: &event_tx,
            client: Some(&client),
        };

        handle_task(AppTask::FetchResults, &ctx).unwrap();

        assert!(matches!(
            event_rx.try_recv(),
            Ok(AppEvent::ResultsReady(songs)) if songs.is_empty()
        ));
        server.join().unwrap();
    }

    #[test]
    fn network_error_becomes_fetch_failed() {
        let (event_tx, event_rx) = mpsc::channel();
        let client = SearchClient::new(&config_for(closed_endpoint())).unwrap();
        let ctx = TaskContext {
            event_tx: &event_tx,
            client: Some(&client),
        };

        handle_task(AppTask::FetchResults, &ctx).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::FetchFailed(_))));
    }

    #[test]
    fn unavailable_client_becomes_fetch_failed() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = spawn_task_worker(&config_for("::".into()), task_rx, event_tx);
        task_tx.send(AppTask::FetchResults).unwrap();

        assert!(matches!(
            event_rx.recv_timeout(WAIT),
            Ok(AppEvent::FetchFailed(_))
        ));

        drop(task_tx);
        worker.join().unwrap();
    }

    #[test]
    fn worker_stops_when_events_are_no_longer_received() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_rx);

        let worker = spawn_task_worker(&config_for("::".into()), task_rx, event_tx);
        task_tx.send(AppTask::FetchResults).unwrap();

        worker.join().unwrap();
    }
}
