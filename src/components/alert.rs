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

//! Blocking user notification.
//!
//! While an alert is shown it captures all input; it is dismissed with Enter
//! or Esc and the application then carries on where it left off.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{render::centered_rect, theme::Theme};

const ALERT_WIDTH: u16 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    pub(crate) title: String,
    pub(crate) message: String,
}

impl Alert {
    pub(crate) fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Whether `key` dismisses the alert.
    pub(crate) fn is_dismissed_by(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc)
    }

    /// Rows the wrapped message needs inside the popup.
    fn message_rows(&self) -> u16 {
        let text_width = ALERT_WIDTH.saturating_sub(4).max(1);
        let chars = u16::try_from(self.message.chars().count()).unwrap_or(u16::MAX);
        chars.div_ceil(text_width).max(1)
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Borders, padding, blank line and the hint take six rows.
        let popup = centered_rect(area, ALERT_WIDTH, self.message_rows().saturating_add(6));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(theme.alert_colour))
            .padding(Padding::uniform(1));

        let text = format!("{}\n\n[Enter] OK", self.message);

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(text)
                .block(block)
                .style(Style::default().fg(theme.text_colour).bg(theme.popup_colour))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            popup,
        );
    }
}
