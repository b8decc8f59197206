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

//! Display formatting for map coordinates.

use crate::model::Position;

/// Formats a position as degrees with hemisphere letters, to four decimal
/// places (roughly ten metres).
///
/// ```ignore
/// assert_eq!(format_position(Position::new(6.9092478, 79.856681)), "6.9092°N 79.8567°E");
/// ```
pub(crate) fn format_position(position: Position) -> String {
    let ns = if position.lat < 0.0 { 'S' } else { 'N' };
    let ew = if position.lng < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.4}°{} {:.4}°{}",
        position.lat.abs(),
        ns,
        position.lng.abs(),
        ew
    )
}
