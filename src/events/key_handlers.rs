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
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::Alert,
    events::{AppEvent, AppEventProcessor},
};

/// Maps keyboard input to application actions.
///
/// Input is routed by precedence:
///
/// * **Alert**: A shown alert captures every key, and only Enter or Esc
///   dismiss it. Queued alerts then follow one at a time.
/// * **Search panel**: While open, the panel receives every key.
/// * **Map**: Otherwise keys open search, close the overlay, refit the map or
///   quit.
///
/// # Errors
///
/// Returns an error if an event cannot be sent on the application channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if app.current_alert().is_some() {
        if Alert::is_dismissed_by(&key) {
            app.alerts.pop_front();
        }
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if app.search_view.is_open {
        return app.search_view.process_event(Event::Key(key), &app.event_tx);
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('/') | KeyCode::Char('s') => app.search_view.open(),
        KeyCode::Esc => {
            if let Some(map) = app.map.as_mut() {
                map.close_overlay();
            }
        }
        KeyCode::Char('f') => {
            if let Some(map) = app.map.as_mut() {
                map.fit_bounds();
            }
        }
        _ => {}
    }

    Ok(())
}
