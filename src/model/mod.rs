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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the points of
//! interest shown on the map and the venue detail fetched for a selected
//! point, together with the keys used to look them up.

pub(crate) mod search;
pub(crate) mod seed;

use std::{cell::OnceCell, fmt};

use crate::map::MarkerId;

/// Index of a [`Location`] within the seed dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct LocationId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Position {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
}

impl Position {
    pub(crate) const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Key used for marker visibility lookups.
    ///
    /// Derived only from the coordinates, so two locations sharing a position
    /// share a key.
    pub(crate) fn key(&self) -> PositionKey {
        PositionKey(format!("{}_{}", self.lng, self.lat))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PositionKey(String);

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A point of interest.
///
/// The name and venue id never change once created. The marker is attached
/// by the map presenter on the first render and is never replaced.
#[derive(Debug, Clone)]
pub(crate) struct Location {
    name: String,
    position: Position,
    venue_id: String,
    marker: OnceCell<MarkerId>,
}

impl Location {
    pub(crate) fn new(name: impl Into<String>, lat: f64, lng: f64, venue_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::new(lat, lng),
            venue_id: venue_id.into(),
            marker: OnceCell::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn venue_id(&self) -> &str {
        &self.venue_id
    }

    pub(crate) fn marker(&self) -> Option<MarkerId> {
        self.marker.get().copied()
    }

    /// Records the marker rendered for this location.
    ///
    /// Returns `false`, leaving the existing marker in place, if one was
    /// already attached.
    pub(crate) fn attach_marker(&self, marker: MarkerId) -> bool {
        self.marker.set(marker).is_ok()
    }
}

/// Venue detail for a selected location, as returned by the places API.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Detail {
    pub(crate) location: LocationId,
    pub(crate) best_photo: String,
    pub(crate) phone: String,
    pub(crate) source_url: String,
    pub(crate) address: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_key_is_longitude_then_latitude() {
        let position = Position::new(6.890622, 79.858873);
        assert_eq!(position.key().to_string(), "79.858873_6.890622");
    }

    #[test]
    fn shared_positions_share_a_key() {
        let a = Location::new("A", 6.9, 79.8, "a");
        let b = Location::new("B", 6.9, 79.8, "b");
        assert_eq!(a.position().key(), b.position().key());
    }

    #[test]
    fn marker_is_attached_only_once() {
        let location = Location::new("Barista", 6.910408, 79.861888, "4ba06f61f964a520986d37e3");
        assert_eq!(location.marker(), None);

        assert!(location.attach_marker(MarkerId(3)));
        assert!(!location.attach_marker(MarkerId(7)));
        assert_eq!(location.marker(), Some(MarkerId(3)));
    }
}
