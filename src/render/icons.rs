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

//! Unicode symbols for the map canvas.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

pub(crate) const MARKER: &str = "\u{25CF}";
pub(crate) const MARKER_SELECTED: &str = "\u{25C9}";

// Alternate frames of the bounce animation.
pub(crate) const MARKER_BOUNCE_UP: &str = "\u{25B2}";
pub(crate) const MARKER_BOUNCE_DOWN: &str = "\u{25BC}";

// Marker still settling after it was created.
pub(crate) const MARKER_DROPPING: &str = "\u{25CB}";
