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

//! # Neighbourhood Map TUI.
//!
//! A terminal map of a handful of neighbourhood places, with a word-prefix
//! search that filters the place list and the map markers together, and a
//! detail popup fetched from the places service for the selected place.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** fetches venue details from the places service.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state and the map animations.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod coordinator;
mod events;
mod logging;
mod map;
mod model;
mod places;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    collections::VecDeque,
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    components::{Alert, SearchView},
    config::AppConfig,
    coordinator::DetailCoordinator,
    events::{AppEvent, process_events},
    map::{MAP_ERROR_ALERT, MapPresenter},
    model::{Location, search::SearchFilter, seed::seed_locations},
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

    pub locations: Vec<Location>,
    pub search: SearchFilter,

    pub search_view: SearchView,

    /// `None` when the map could not be created.
    pub map: Option<MapPresenter>,
    pub coordinator: DetailCoordinator,

    /// Pending alerts, shown one at a time from the front.
    pub alerts: VecDeque<Alert>,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// A map that fails to initialise is reported with an alert, the rest of
    /// the application keeps working without it.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let locations = seed_locations();
        let search = SearchFilter::new(&locations);
        let search_view = SearchView::new(search.result().locations.clone());

        let mut alerts = VecDeque::new();
        let map = match MapPresenter::initialize(&config.map, &locations) {
            Ok(map) => Some(map),
            Err(e) => {
                error!("{e}");
                alerts.push_back(Alert::new("Map", MAP_ERROR_ALERT));
                None
            }
        };

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            locations,
            search,
            search_view,
            map,
            coordinator: DetailCoordinator::new(),
            alerts,
        }
    }

    /// Queues an alert behind any that are already shown.
    pub fn push_alert(&mut self, alert: Alert) {
        self.alerts.push_back(alert);
    }

    /// The alert currently capturing input, if any.
    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _log_guard = logging::init_logging(&config.log).context("Failed to initialise logging")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("{e:#}");
    }
    info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and captures the
///   mouse.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

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
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to fetch venue details for [`AppTask`]s.
/// * An input thread to poll for keyboard, mouse and resize events.
/// * A tick thread to drive animations and periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
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
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    error!("failed to read terminal event: {e}");
                    break;
                }
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

    info!(places = app.locations.len(), "application started");

    // Draw once before the first event arrives
    terminal.draw(|f| render::draw(f, app))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
