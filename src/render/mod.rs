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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod icons;
mod map;
mod overlay;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{map::draw_map, overlay::draw_overlay, status::draw_status},
};

const SIDEBAR_WIDTH: u16 = 34;

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the map with an optional search sidebar on the
/// left and a single status line below. The detail overlay and any alert are
/// drawn last, on top of everything else.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to record where interactive widgets were drawn for mouse hit tests.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // Main layout: sidebar, map
    let sidebar_width = if app.search_view.is_open { SIDEBAR_WIDTH } else { 0 };
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(outer[0]);

    if app.search_view.is_open {
        app.search_view
            .draw(f, main[0], &app.locations, &app.theme);
    }

    draw_map(f, main[1], app);
    draw_overlay(f, main[1], app);
    draw_status(f, outer[1], app);

    if let Some(alert) = app.current_alert() {
        alert.draw(f, area, &app.theme);
    }
}

/// A rectangle of at most `width` by `height` centred in `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_the_area() {
        let area = Rect::new(10, 5, 40, 10);

        assert_eq!(centered_rect(area, 20, 4), Rect::new(20, 8, 20, 4));
        assert_eq!(centered_rect(area, 100, 100), area);
    }
}
