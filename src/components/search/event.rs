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

//! Event routing for the search panel.
//!
//! Navigation and selection keys drive the result list; every other key is
//! delegated to the text input. A change to the query is published as
//! [`AppEvent::SearchTextChanged`] and a chosen row as
//! [`AppEvent::LocationSelected`].

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SearchView,
    coordinator::SelectionSource,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if !self.is_open {
            return Ok(());
        }

        let Event::Key(key_event) = event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Esc => self.close(),
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Enter => {
                if let Some(id) = self.selected_location() {
                    event_tx.send(AppEvent::LocationSelected(id, SelectionSource::List))?;
                }
            }
            _ => {
                let before = self.input.value().to_string();
                self.input.handle_event(&event);
                if self.input.value() != before {
                    event_tx.send(AppEvent::SearchTextChanged(self.input.value().to_string()))?;
                }
            }
        }

        Ok(())
    }
}
