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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, mouse, resize), the periodic tick, and the
//! background task worker with the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received as [`AppEvent`]s through a channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and sends work to the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! Each state transition between the views has exactly one event:
//! [`AppEvent::SearchTextChanged`] from the search panel,
//! [`AppEvent::LocationSelected`] from the list or a marker, and
//! [`AppEvent::DetailReady`] from the task worker.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    coordinator::{RequestId, SelectionSource},
    model::{Detail, LocationId},
    places::PlacesError,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    SearchTextChanged(String),
    LocationSelected(LocationId, SelectionSource),

    DetailReady(RequestId, Detail),
    DetailFailed(RequestId, PlacesError),

    Tick,

    ExitApplication,

    Error(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse)?,
        AppEvent::Resize => handle_resize(app),
        AppEvent::SearchTextChanged(text) => handle_search_text_changed(app, &text),
        AppEvent::LocationSelected(id, source) => handle_location_selected(app, id, source),
        AppEvent::DetailReady(request, detail) => handle_detail_ready(app, request, detail),
        AppEvent::DetailFailed(request, err) => handle_detail_failed(app, request, &err),
        AppEvent::Tick => handle_tick(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}
