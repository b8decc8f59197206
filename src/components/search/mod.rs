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

//! Search panel state and result list navigation.
//!
//! This module holds the text input the user types a query into, the list of
//! locations currently matching it, and the highlighted row. The panel can be
//! opened and closed; choosing a result closes it.

mod event;
mod render;

use ratatui::{layout::Rect, widgets::ListState};
use tui_input::Input;

use crate::model::LocationId;

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) locations: Vec<LocationId>,
    pub(crate) list_state: ListState,
    pub(crate) is_open: bool,
    list_area: Option<Rect>,
}

impl SearchView {
    pub(crate) fn new(locations: Vec<LocationId>) -> Self {
        let mut view = Self {
            input: Input::default(),
            locations: vec![],
            list_state: ListState::default(),
            is_open: false,
            list_area: None,
        };
        view.set_locations(locations);
        view
    }

    pub(crate) fn open(&mut self) {
        self.is_open = true;
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
        self.list_area = None;
    }

    /// Replaces the result list, highlighting the first row.
    pub(crate) fn set_locations(&mut self, locations: Vec<LocationId>) {
        self.list_state
            .select(if locations.is_empty() { None } else { Some(0) });
        self.locations = locations;
    }

    pub(crate) fn selected_location(&self) -> Option<LocationId> {
        let index = self.list_state.selected()?;
        self.locations.get(index).copied()
    }

    pub(crate) fn next(&mut self) {
        let len = self.locations.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub(crate) fn previous(&mut self) {
        let len = self.locations.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Location shown on the list row at a terminal cell, if any.
    pub(crate) fn row_at(&self, column: u16, row: u16) -> Option<LocationId> {
        let area = self.list_area?;
        if !area.contains((column, row).into()) {
            return None;
        }
        let index = usize::from(row - area.y) + self.list_state.offset();
        self.locations.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<LocationId> {
        (0..n).map(LocationId).collect()
    }

    #[test]
    fn new_view_highlights_first_result() {
        let view = SearchView::new(ids(3));
        assert_eq!(view.selected_location(), Some(LocationId(0)));
        assert!(!view.is_open);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut view = SearchView::new(ids(3));

        view.previous();
        assert_eq!(view.selected_location(), Some(LocationId(2)));
        view.next();
        assert_eq!(view.selected_location(), Some(LocationId(0)));
        view.next();
        assert_eq!(view.selected_location(), Some(LocationId(1)));
    }

    #[test]
    fn empty_results_have_no_selection() {
        let mut view = SearchView::new(ids(3));
        view.set_locations(vec![]);

        view.next();
        assert_eq!(view.selected_location(), None);
    }

    #[test]
    fn row_hit_test_requires_a_drawn_list() {
        let mut view = SearchView::new(vec![LocationId(4), LocationId(1)]);
        assert_eq!(view.row_at(2, 3), None);

        view.list_area = Some(Rect::new(0, 3, 30, 10));
        assert_eq!(view.row_at(2, 3), Some(LocationId(4)));
        assert_eq!(view.row_at(2, 4), Some(LocationId(1)));
        assert_eq!(view.row_at(2, 5), None);
        assert_eq!(view.row_at(40, 3), None);
    }
}
