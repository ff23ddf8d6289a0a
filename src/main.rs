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

//! # Song List TUI.
//!
//! A terminal-based browser for song search results.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer that talks to a remote search API.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** performs the network requests so the UI stays
//!   responsive while a fetch is in flight.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is restored even when the application fails. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod api;
mod cli;
mod components;
mod config;
mod events;
mod model;
mod render;
mod tasks;
mod theme;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    cli::Cli,
    components::SongListView,
    config::AppConfig,
    events::{AppEvent, mount, process_events},
    model::song_list::SongList,
    tasks::AppTask,
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub songs: SongList,
    pub song_list_view: SongListView,

    pub ticks: usize,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            songs: SongList::new(),
            song_list_view: SongListView::new(),
            ticks: 0,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, sets up logging and the communication channels,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(config::load_config());

    init_logging(&config)?;
    info!(
        "Starting, searching {} for \"{}\" (limit {})",
        config.endpoint, config.search_term, config.result_limit
    );

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Routes log output to the configured log file.
///
/// The terminal is owned by the TUI, so nothing may be logged to stdout or
/// stderr. The filter defaults to `info` and can be changed with `RUST_LOG`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture so the wheel can scroll and refresh the list.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], and ensures the
/// cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s, the network requests.
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread to animate the loading and refresh spinners.
///
/// After spawning the workers it mounts the song list, which issues the
/// initial fetch, and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // The worker is detached, it ends when the task channel closes on exit.
    tasks::spawn_task_worker(&app.config, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                // Redraw at the new size
                Ok(Event::Resize(_, _)) => AppEvent::Tick,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx_input.send(event).is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    mount(app).context("Failed to request initial song list")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
