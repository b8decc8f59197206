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

//! Rendering for the search panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

use crate::{components::SearchView, model::Location, theme::Theme};

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, locations: &[Location], theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(theme.accent_colour))
            .padding(Padding::horizontal(1));
        let input_inner = input_block.inner(chunks[0]);

        f.render_widget(
            Paragraph::new(self.input.value())
                .style(Style::default().fg(theme.text_colour))
                .block(input_block),
            chunks[0],
        );

        f.set_cursor_position((
            cursor_column(input_inner, self.input.visual_cursor()),
            input_inner.y,
        ));

        let items: Vec<ListItem> = self
            .locations
            .iter()
            .filter_map(|id| locations.get(id.0))
            .map(|location| ListItem::new(location.name()))
            .collect();

        let list_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Places ({}) ", self.locations.len()))
            .border_style(Style::default().fg(theme.border_colour));
        self.list_area = Some(list_block.inner(chunks[1]));

        let list = List::new(items)
            .block(list_block)
            .style(Style::default().fg(theme.text_colour))
            .highlight_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}

/// Terminal column of the input cursor, kept inside the input box.
fn cursor_column(inner: Rect, cursor: usize) -> u16 {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_inside_the_input_box() {
        let inner = Rect::new(2, 1, 20, 1);

        assert_eq!(cursor_column(inner, 0), 2);
        assert_eq!(cursor_column(inner, 5), 7);
        assert_eq!(cursor_column(inner, 400), 21);
        assert_eq!(cursor_column(inner, usize::MAX), 21);
    }
}
