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

//! Terminal environment and styling utilities.
//!
//! The terminal background is changed with OSC (Operating System Command)
//! escape sequences: OSC 11 sets it, OSC 111 restores the user's own. Most
//! modern terminals (XTerm, iTerm2, Alacritty, Kitty) understand both; others
//! ignore them.

use std::io::{self, Write};

/// Sets the terminal background colour, e.g. `"#1e1e1e"`.
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b]11;{hex_color}\x07")?;
    stdout.flush()
}

/// Restores the terminal's configured background colour.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
