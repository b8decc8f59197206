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

//! Render the map canvas and its markers.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Map, MapResolution},
    },
};

use crate::{
    App,
    map::{Animation, MapPresenter, Marker},
    render::icons::{
        MARKER, MARKER_BOUNCE_DOWN, MARKER_BOUNCE_UP, MARKER_DROPPING, MARKER_SELECTED,
    },
    theme::Theme,
    util::format::format_position,
};

pub(crate) fn draw_map(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;

    let Some(map) = app.map.as_mut() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour));
        f.render_widget(
            Paragraph::new("Map unavailable")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", format_position(map.viewport().center)))
        .border_style(Style::default().fg(theme.border_colour));
    let inner = block.inner(area);
    map.set_canvas_area(inner);

    let viewport = *map.viewport();
    let canvas = Canvas::default()
        .block(block)
        .background_color(theme.background_colour)
        .x_bounds(viewport.x_bounds())
        .y_bounds(viewport.y_bounds())
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: theme.border_colour,
            });
        });
    f.render_widget(canvas, area);

    draw_markers(f, inner, map, &theme);
}

/// Markers are drawn straight into the buffer at the cells used for mouse
/// hit tests.
fn draw_markers(f: &mut Frame, area: Rect, map: &MapPresenter, theme: &Theme) {
    let buf = f.buffer_mut();

    for marker in map.markers().iter().filter(|m| m.visible) {
        let Some((x, y)) = map.viewport().project(marker.position, area) else {
            continue;
        };

        let anchored = map.overlay().anchor == Some(marker.id);
        let style = if anchored {
            Style::default()
                .fg(theme.marker_selected_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.marker_colour)
        };
        buf.set_string(x, y, glyph(marker, anchored, map.bounce_up()), style);

        let label_x = x + 2;
        if label_x < area.right() {
            buf.set_stringn(
                label_x,
                y,
                &marker.title,
                usize::from(area.right() - label_x),
                Style::default().fg(theme.marker_label_colour),
            );
        }
    }
}

fn glyph(marker: &Marker, anchored: bool, bounce_up: bool) -> &'static str {
    match marker.animation {
        Some(Animation::Bounce) if bounce_up => MARKER_BOUNCE_UP,
        Some(Animation::Bounce) => MARKER_BOUNCE_DOWN,
        Some(Animation::Drop { .. }) => MARKER_DROPPING,
        None if anchored => MARKER_SELECTED,
        None => MARKER,
    }
}
