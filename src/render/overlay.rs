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

//! Render the detail overlay anchored to the selected marker.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::App;

const OVERLAY_WIDTH: u16 = 48;

pub(crate) fn draw_overlay(f: &mut Frame, area: Rect, app: &App) {
    let Some(map) = &app.map else {
        return;
    };
    let overlay = map.overlay();
    let (Some(content), Some(anchor)) = (&overlay.content, overlay.anchor) else {
        return;
    };
    let theme = &app.theme;

    let label = Style::default().fg(theme.muted_colour);
    let value = Style::default().fg(theme.text_colour);

    let mut lines = vec![Line::from(Span::styled(
        content.title.as_str(),
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.push(Line::from(vec![
        Span::styled("Photo   ", label),
        Span::styled(content.photo_url.as_str(), value),
    ]));
    for (idx, address_line) in content.address.iter().enumerate() {
        let heading = if idx == 0 { "Address " } else { "        " };
        lines.push(Line::from(vec![
            Span::styled(heading, label),
            Span::styled(address_line.as_str(), value),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Phone   ", label),
        Span::styled(content.phone.as_str(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Source  ", label),
        Span::styled(
            content.source_url.as_str(),
            value.add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let marker_cell = map
        .canvas_area()
        .zip(map.markers().get(anchor.0))
        .and_then(|(canvas, marker)| map.viewport().project(marker.position, canvas));
    let popup = place_popup(area, marker_cell, OVERLAY_WIDTH, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .padding(Padding::horizontal(1))
        .title(" Detail ");

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(theme.popup_colour)),
        popup,
    );
}

/// Positions the popup just above the marker cell, kept inside `area`. Without
/// a marker cell the popup sits in the top right corner.
fn place_popup(area: Rect, marker_cell: Option<(u16, u16)>, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = area.right() - width;
    let max_y = area.bottom() - height;

    let (x, y) = match marker_cell {
        Some((column, row)) => {
            let x = column.saturating_sub(width / 2).clamp(area.x, max_x);
            let y = if row >= area.y + height {
                row - height
            } else {
                (row + 1).min(max_y)
            };
            (x, y.max(area.y))
        }
        None => (max_x, area.y),
    };

    Rect::new(x, y, width, height)
}
