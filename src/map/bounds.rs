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

//! Geographic bounds and the visible map viewport.

use ratatui::layout::Rect;

use crate::model::Position;

/// Zoom level 0 shows the whole 360 degrees of longitude.
const WORLD_SPAN: f64 = 360.0;

/// Share of the bounds extent added on each side when fitting.
const FIT_PADDING: f64 = 0.1;

/// Smallest span the viewport fits to, so a single point still gets a view.
const MIN_SPAN: f64 = 0.002;

/// Accumulates positions into the smallest enclosing box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Bounds {
    south_west: Option<Position>,
    north_east: Option<Position>,
}

impl Bounds {
    pub(crate) fn extend(&mut self, position: Position) {
        match (self.south_west.as_mut(), self.north_east.as_mut()) {
            (Some(sw), Some(ne)) => {
                sw.lat = sw.lat.min(position.lat);
                sw.lng = sw.lng.min(position.lng);
                ne.lat = ne.lat.max(position.lat);
                ne.lng = ne.lng.max(position.lng);
            }
            _ => {
                self.south_west = Some(position);
                self.north_east = Some(position);
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.south_west.is_none()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, position: Position) -> bool {
        match (self.south_west, self.north_east) {
            (Some(sw), Some(ne)) => {
                (sw.lat..=ne.lat).contains(&position.lat) && (sw.lng..=ne.lng).contains(&position.lng)
            }
            _ => false,
        }
    }

    fn center_and_span(&self) -> Option<(Position, f64, f64)> {
        let (sw, ne) = (self.south_west?, self.north_east?);
        let center = Position::new((sw.lat + ne.lat) / 2.0, (sw.lng + ne.lng) / 2.0);
        Some((center, ne.lat - sw.lat, ne.lng - sw.lng))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    pub(crate) center: Position,
    pub(crate) lat_span: f64,
    pub(crate) lng_span: f64,
}

impl Viewport {
    pub(crate) fn at_zoom(center: Position, zoom: u8) -> Self {
        let span = WORLD_SPAN / 2f64.powi(i32::from(zoom));
        Self {
            center,
            lat_span: span,
            lng_span: span,
        }
    }

    /// A viewport showing all of `bounds` with some padding, or `None` if
    /// the bounds are empty.
    pub(crate) fn fitting(bounds: &Bounds) -> Option<Self> {
        let (center, lat_extent, lng_extent) = bounds.center_and_span()?;
        let pad = 1.0 + 2.0 * FIT_PADDING;
        Some(Self {
            center,
            lat_span: (lat_extent * pad).max(MIN_SPAN),
            lng_span: (lng_extent * pad).max(MIN_SPAN),
        })
    }

    pub(crate) fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span / 2.0;
        [self.center.lng - half, self.center.lng + half]
    }

    pub(crate) fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    /// Terminal cell of `position` when the viewport is drawn into `area`.
    pub(crate) fn project(&self, position: Position, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }

        let [left, right] = self.x_bounds();
        let [bottom, top] = self.y_bounds();
        if !(left..=right).contains(&position.lng) || !(bottom..=top).contains(&position.lat) {
            return None;
        }

        let x = (position.lng - left) / (right - left) * f64::from(area.width - 1);
        let y = (top - position.lat) / (top - bottom) * f64::from(area.height - 1);

        Some((area.x + x.round() as u16, area.y + y.round() as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_grow_to_enclose_every_position() {
        let mut bounds = Bounds::default();
        assert!(bounds.is_empty());

        bounds.extend(Position::new(6.89, 79.85));
        bounds.extend(Position::new(6.91, 79.87));
        bounds.extend(Position::new(6.90, 79.84));

        assert!(!bounds.is_empty());
        assert!(bounds.contains(Position::new(6.90, 79.86)));
        assert!(!bounds.contains(Position::new(6.95, 79.86)));
    }

    #[test]
    fn fitted_viewport_contains_the_bounds() {
        let mut bounds = Bounds::default();
        bounds.extend(Position::new(6.890622, 79.858873));
        bounds.extend(Position::new(6.917900, 79.848445));

        let viewport = Viewport::fitting(&bounds).unwrap();
        let [left, right] = viewport.x_bounds();
        let [bottom, top] = viewport.y_bounds();

        assert!(left < 79.848445 && right > 79.858873);
        assert!(bottom < 6.890622 && top > 6.917900);
    }

    #[test]
    fn single_point_gets_a_minimum_span() {
        let mut bounds = Bounds::default();
        bounds.extend(Position::new(6.9, 79.8));

        let viewport = Viewport::fitting(&bounds).unwrap();
        assert!(viewport.lat_span > 0.0 && viewport.lng_span > 0.0);
        assert_eq!(Viewport::fitting(&Bounds::default()), None);
    }

    #[test]
    fn zoom_halves_the_span() {
        let center = Position::new(6.9, 79.8);
        let z8 = Viewport::at_zoom(center, 8);
        let z9 = Viewport::at_zoom(center, 9);
        assert!((z8.lng_span / z9.lng_span - 2.0).abs() < 1e-9);
    }

    #[test]
    fn projection_maps_corners_and_rejects_outside_points() {
        let viewport = Viewport {
            center: Position::new(0.0, 0.0),
            lat_span: 2.0,
            lng_span: 2.0,
        };
        let area = Rect::new(10, 5, 21, 11);

        assert_eq!(viewport.project(Position::new(1.0, -1.0), area), Some((10, 5)));
        assert_eq!(viewport.project(Position::new(-1.0, 1.0), area), Some((30, 15)));
        assert_eq!(viewport.project(Position::new(0.0, 0.0), area), Some((20, 10)));
        assert_eq!(viewport.project(Position::new(2.0, 0.0), area), None);
    }
}
