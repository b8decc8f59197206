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

//! Markers and the detail overlay drawn on the map canvas.

use std::time::Instant;

use crate::{
    map::MarkerId,
    model::{LocationId, Position},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Animation {
    /// Newly created marker settling into place.
    Drop { until: Instant },
    /// Emphasis on the marker the overlay is anchored to. Loops until stopped.
    Bounce,
}

#[derive(Debug, Clone)]
pub(crate) struct Marker {
    pub(crate) id: MarkerId,
    pub(crate) position: Position,
    pub(crate) title: String,
    pub(crate) visible: bool,
    pub(crate) animation: Option<Animation>,
    /// Location selected when the marker is clicked.
    pub(crate) target: LocationId,
}

/// Content shown in the detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OverlayContent {
    pub(crate) title: String,
    pub(crate) photo_url: String,
    pub(crate) address: Vec<String>,
    pub(crate) phone: String,
    pub(crate) source_url: String,
}

/// The single popup anchored to a marker.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overlay {
    pub(crate) content: Option<OverlayContent>,
    pub(crate) anchor: Option<MarkerId>,
}

impl Overlay {
    #[cfg(test)]
    pub(crate) fn is_open(&self) -> bool {
        self.anchor.is_some() && self.content.is_some()
    }
}
