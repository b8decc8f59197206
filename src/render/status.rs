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

//! Render the single-line status bar.
//!
//! The bar shows the active query with the number of matching places on the
//! left and the key hints for the current mode on the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const MAP_HINTS: &str = "[/] search  [f] fit  [Esc] close  [q] quit";
const SEARCH_HINTS: &str = "[\u{2191}\u{2193}] move  [Enter] select  [Esc] close";
const ALERT_HINTS: &str = "[Enter] dismiss";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(48)])
        .horizontal_margin(1)
        .split(area);

    let mut spans = vec![Span::styled(
        format!(
            "{}/{} places, {} on map",
            app.search.result().locations.len(),
            app.locations.len(),
            app.search.result().visibility.len()
        ),
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )];
    if !app.search.text().is_empty() {
        spans.push(Span::styled(
            format!(" matching \"{}\"", app.search.text()),
            Style::default().fg(theme.text_colour),
        ));
    }
    if app.coordinator.is_fetching() {
        spans.push(Span::styled(
            "  fetching\u{2026}",
            Style::default().fg(theme.muted_colour),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let hints = if app.current_alert().is_some() {
        ALERT_HINTS
    } else if app.search_view.is_open {
        SEARCH_HINTS
    } else {
        MAP_HINTS
    };
    f.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Right),
        chunks[1],
    );
}
