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

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, error, warn};

use crate::{
    App,
    components::Alert,
    coordinator::{RequestId, SelectionSource, overlay_content},
    events::AppEvent,
    model::{Detail, LocationId},
    places::PlacesError,
};

pub(super) fn handle_search_text_changed(app: &mut App, text: &str) {
    let result = app.search.set_search_text(text, &app.locations);
    debug!(query = text, matches = result.locations.len(), "search text changed");

    app.search_view.set_locations(result.locations.clone());
    if let Some(map) = app.map.as_mut() {
        map.render(&app.locations, Some(&result.visibility));
    }
}

/// Requests the detail of the selected location. A request that cannot be
/// handed to the task worker is reported with an alert.
pub(super) fn handle_location_selected(app: &mut App, id: LocationId, source: SelectionSource) {
    let Some(location) = app.locations.get(id.0) else {
        warn!(?id, "selected location does not exist");
        return;
    };

    if source == SelectionSource::List {
        app.search_view.close();
    }

    if let Err(e) = app.coordinator.on_select(id, location, &app.task_tx) {
        error!(?id, "failed to request venue detail: {e:#}");
        app.push_alert(Alert::new("Places", format!("{e:#}")));
    }
}

pub(super) fn handle_detail_ready(app: &mut App, request: RequestId, detail: Detail) {
    let Some(detail) = app.coordinator.on_detail_ready(request, detail) else {
        return;
    };
    let Some(location) = app.locations.get(detail.location.0) else {
        return;
    };

    let content = overlay_content(detail, location);
    if let Some(map) = app.map.as_mut() {
        map.show_detail(content, location, Instant::now());
    }
}

pub(super) fn handle_detail_failed(app: &mut App, request: RequestId, err: &PlacesError) {
    error!(?request, "failed to fetch venue detail: {err}");

    if app.coordinator.on_detail_failed(request) {
        app.push_alert(Alert::new("Places", err.to_string()));
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!("{message}");
    app.push_alert(Alert::new("Error", message));
}

pub(super) fn handle_resize(app: &mut App) {
    if let Some(map) = app.map.as_mut() {
        map.fit_bounds();
    }
}

pub(super) fn handle_tick(app: &mut App) {
    if let Some(map) = app.map.as_mut() {
        map.tick(Instant::now());
    }
}

/// A left click selects the list row under the pointer, or failing that the
/// marker under it.
pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if app.current_alert().is_some() || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }

    if let Some(id) = app.search_view.row_at(mouse.column, mouse.row) {
        app.event_tx
            .send(AppEvent::LocationSelected(id, SelectionSource::List))?;
        return Ok(());
    }

    let target = app
        .map
        .as_ref()
        .and_then(|map| map.marker_at(mouse.column, mouse.row));
    if let Some(id) = target {
        app.event_tx
            .send(AppEvent::LocationSelected(id, SelectionSource::Marker))?;
    }

    Ok(())
}
