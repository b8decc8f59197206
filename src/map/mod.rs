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

//! Map presentation.
//!
//! [`MapPresenter`] owns the map state drawn by the map canvas: one marker per
//! location, the accumulated bounds of every marker processed so far, the
//! current viewport, and the single detail overlay. Filtering never creates
//! or destroys markers, it only toggles their visibility.
//!
//! Camera moves requested by [`MapPresenter::show_detail`] are deferred by a
//! short delay and applied on a later [`MapPresenter::tick`], so the marker
//! drop animation settles before the view jumps.

mod bounds;
mod marker;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use thiserror::Error;
use tracing::{debug, warn};

pub(crate) use bounds::{Bounds, Viewport};
pub(crate) use marker::{Animation, Marker, Overlay, OverlayContent};

use crate::{
    config::MapConfig,
    model::{Location, LocationId, Position, search::VisibilityIndex},
};

pub(crate) const MAX_ZOOM: u8 = 21;

/// Shown to the user when the map cannot be created.
pub(crate) const MAP_ERROR_ALERT: &str = "Map error. Please check configuration for the map view";

const DROP_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct MarkerId(pub(crate) usize);

#[derive(Debug, Error)]
pub(crate) enum MapError {
    #[error("map initialization failed: {0}")]
    Initialization(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CameraMove {
    due: Instant,
    center: Position,
    zoom: u8,
}

pub(crate) struct MapPresenter {
    markers: Vec<Marker>,
    overlay: Overlay,
    bounds: Bounds,
    viewport: Viewport,
    pending_camera: Option<CameraMove>,
    detail_zoom: u8,
    center_delay: Duration,
    bounce_up: bool,
    canvas_area: Option<Rect>,
}

impl MapPresenter {
    /// Creates the map centred on the configured coordinate and renders every
    /// location unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Initialization`] if the configured centre or zoom
    /// levels are out of range.
    pub(crate) fn initialize(config: &MapConfig, locations: &[Location]) -> Result<Self, MapError> {
        validate_config(config)?;

        let center = Position::new(config.center_lat, config.center_lng);
        let mut presenter = Self {
            markers: Vec::with_capacity(locations.len()),
            overlay: Overlay::default(),
            bounds: Bounds::default(),
            viewport: Viewport::at_zoom(center, config.zoom),
            pending_camera: None,
            detail_zoom: config.detail_zoom,
            center_delay: Duration::from_millis(config.center_delay_ms),
            bounce_up: false,
            canvas_area: None,
        };
        presenter.render(locations, None);

        Ok(presenter)
    }

    /// Renders `locations` as markers and refits the viewport.
    ///
    /// Without a visibility index every location gets a marker (created on
    /// first use) and is shown. With one, existing markers are shown only if
    /// their position key is in the index. Every processed marker extends the
    /// bounds, whether shown or not.
    pub(crate) fn render(&mut self, locations: &[Location], visibility: Option<&VisibilityIndex>) {
        let now = Instant::now();

        for (idx, location) in locations.iter().enumerate() {
            let marker_id = match (location.marker(), visibility) {
                (Some(id), _) => id,
                (None, None) => self.create_marker(LocationId(idx), location, now),
                (None, Some(_)) => {
                    warn!(location = location.name(), "no marker to filter");
                    continue;
                }
            };

            let Some(marker) = self.markers.get_mut(marker_id.0) else {
                continue;
            };
            marker.visible = match visibility {
                Some(index) => index.contains(&location.position().key()),
                None => true,
            };
            self.bounds.extend(marker.position);
        }

        self.fit_bounds();
    }

    fn create_marker(&mut self, target: LocationId, location: &Location, now: Instant) -> MarkerId {
        let id = MarkerId(self.markers.len());
        self.markers.push(Marker {
            id,
            position: location.position(),
            title: location.name().to_string(),
            visible: true,
            animation: Some(Animation::Drop {
                until: now + DROP_DURATION,
            }),
            target,
        });
        location.attach_marker(id);
        id
    }

    /// Opens the overlay on `location`'s marker with `content`.
    ///
    /// Does nothing if the overlay is already anchored to that marker.
    pub(crate) fn show_detail(&mut self, content: OverlayContent, location: &Location, now: Instant) {
        let Some(marker_id) = location.marker() else {
            warn!(location = location.name(), "detail for a location without a marker");
            return;
        };

        if self.overlay.anchor == Some(marker_id) {
            return;
        }

        self.close_overlay();

        self.pending_camera = Some(CameraMove {
            due: now + self.center_delay,
            center: location.position(),
            zoom: self.detail_zoom,
        });

        if let Some(marker) = self.markers.get_mut(marker_id.0) {
            marker.animation = Some(Animation::Bounce);
        }
        self.overlay.content = Some(content);
        self.overlay.anchor = Some(marker_id);
        debug!(location = location.name(), "overlay opened");
    }

    /// Stops the anchored marker's animation and detaches the overlay.
    pub(crate) fn close_overlay(&mut self) {
        if let Some(previous) = self.overlay.anchor.take() {
            if let Some(marker) = self.markers.get_mut(previous.0) {
                marker.animation = None;
            }
        }
    }

    /// Fits the viewport to the accumulated bounds.
    pub(crate) fn fit_bounds(&mut self) {
        if self.bounds.is_empty() {
            debug!("no markers to fit");
            return;
        }
        if let Some(viewport) = Viewport::fitting(&self.bounds) {
            self.viewport = viewport;
        }
    }

    /// Advances animations and applies a camera move once it is due.
    pub(crate) fn tick(&mut self, now: Instant) {
        for marker in self.markers.iter_mut() {
            if let Some(Animation::Drop { until }) = marker.animation {
                if until <= now {
                    marker.animation = None;
                }
            }
        }

        if let Some(camera) = self.pending_camera {
            if camera.due <= now {
                self.viewport = Viewport::at_zoom(camera.center, camera.zoom);
                self.pending_camera = None;
            }
        }

        self.bounce_up = !self.bounce_up;
    }

    /// Records where the canvas was last drawn, for mouse hit tests.
    pub(crate) fn set_canvas_area(&mut self, area: Rect) {
        self.canvas_area = Some(area);
    }

    /// Location of the visible marker at (or next to) a terminal cell.
    pub(crate) fn marker_at(&self, column: u16, row: u16) -> Option<LocationId> {
        let area = self.canvas_area?;

        self.markers
            .iter()
            .filter(|m| m.visible)
            .filter_map(|m| {
                let (x, y) = self.viewport.project(m.position, area)?;
                let distance = x.abs_diff(column).max(y.abs_diff(row));
                (distance <= 1).then_some((distance, m.target))
            })
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, target)| target)
    }

    pub(crate) fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub(crate) fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    #[cfg(test)]
    pub(crate) fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub(crate) fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub(crate) fn canvas_area(&self) -> Option<Rect> {
        self.canvas_area
    }

    pub(crate) fn bounce_up(&self) -> bool {
        self.bounce_up
    }
}

fn validate_config(config: &MapConfig) -> Result<(), MapError> {
    if !config.center_lat.is_finite() || !(-90.0..=90.0).contains(&config.center_lat) {
        return Err(MapError::Initialization(format!(
            "centre latitude {} out of range",
            config.center_lat
        )));
    }
    if !config.center_lng.is_finite() || !(-180.0..=180.0).contains(&config.center_lng) {
        return Err(MapError::Initialization(format!(
            "centre longitude {} out of range",
            config.center_lng
        )));
    }
    for zoom in [config.zoom, config.detail_zoom] {
        if !(1..=MAX_ZOOM).contains(&zoom) {
            return Err(MapError::Initialization(format!(
                "zoom {zoom} outside 1..={MAX_ZOOM}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{search::filter_locations, seed::seed_locations};

    fn content(title: &str) -> OverlayContent {
        OverlayContent {
            title: title.to_string(),
            photo_url: "img/foursquare.png".to_string(),
            address: vec!["No Address".to_string(), "provided".to_string()],
            phone: "No Phone provided".to_string(),
            source_url: "https://foursquare.com/".to_string(),
        }
    }

    fn presenter() -> (MapPresenter, Vec<Location>) {
        let locations = seed_locations();
        let map = MapPresenter::initialize(&MapConfig::default(), &locations).unwrap();
        (map, locations)
    }

    #[test]
    fn initialize_attaches_one_marker_per_location() {
        let (map, locations) = presenter();

        assert_eq!(map.markers().len(), locations.len());
        for (idx, location) in locations.iter().enumerate() {
            let id = location.marker().unwrap();
            let marker = &map.markers()[id.0];
            assert_eq!(marker.target, LocationId(idx));
            assert_eq!(marker.title, location.name());
            assert!(marker.visible);
            assert!(matches!(marker.animation, Some(Animation::Drop { .. })));
        }
        assert!(!map.overlay().is_open());
    }

    #[test]
    fn initialize_rejects_out_of_range_configuration() {
        let locations = seed_locations();

        let config = MapConfig {
            center_lat: 123.0,
            ..MapConfig::default()
        };
        assert!(matches!(
            MapPresenter::initialize(&config, &locations),
            Err(MapError::Initialization(_))
        ));

        let config = MapConfig {
            zoom: 0,
            ..MapConfig::default()
        };
        assert!(MapPresenter::initialize(&config, &locations).is_err());

        let config = MapConfig {
            center_lng: f64::NAN,
            ..MapConfig::default()
        };
        assert!(MapPresenter::initialize(&config, &locations).is_err());
    }

    #[test]
    fn filtering_toggles_visibility_without_recreating_markers() {
        let (mut map, locations) = presenter();
        let ids: Vec<_> = locations.iter().map(|l| l.marker()).collect();

        let result = filter_locations(&locations, "be");
        map.render(&locations, Some(&result.visibility));

        let visible: Vec<_> = map
            .markers()
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Beverly Street"]);
        assert_eq!(map.markers().len(), locations.len());
        assert_eq!(locations.iter().map(|l| l.marker()).collect::<Vec<_>>(), ids);

        let all = filter_locations(&locations, "");
        map.render(&locations, Some(&all.visibility));
        assert!(map.markers().iter().all(|m| m.visible));
    }

    #[test]
    fn second_unfiltered_render_reuses_markers() {
        let (mut map, locations) = presenter();
        map.render(&locations, None);
        assert_eq!(map.markers().len(), locations.len());
    }

    #[test]
    fn bounds_include_hidden_markers() {
        let (mut map, locations) = presenter();

        let none = filter_locations(&locations, "z");
        map.render(&locations, Some(&none.visibility));

        for location in &locations {
            assert!(map.bounds().contains(location.position()));
        }
        let [left, right] = map.viewport().x_bounds();
        assert!(left < 79.848445 && right > 79.869462);
    }

    #[test]
    fn show_detail_anchors_overlay_and_bounces_marker() {
        let (mut map, locations) = presenter();
        let now = Instant::now();

        map.show_detail(content("Barista"), &locations[1], now);

        let anchor = map.overlay().anchor.unwrap();
        assert_eq!(Some(anchor), locations[1].marker());
        assert!(map.overlay().is_open());
        assert_eq!(map.markers()[anchor.0].animation, Some(Animation::Bounce));
        assert_eq!(map.overlay().content.as_ref().unwrap().title, "Barista");
    }

    #[test]
    fn show_detail_for_anchored_location_is_a_no_op() {
        let (mut map, locations) = presenter();
        let now = Instant::now();

        map.show_detail(content("Barista"), &locations[1], now);
        map.tick(now + Duration::from_secs(1));
        let viewport = *map.viewport();

        map.show_detail(content("Something else"), &locations[1], now + Duration::from_secs(2));
        map.tick(now + Duration::from_secs(10));

        assert_eq!(map.overlay().content.as_ref().unwrap().title, "Barista");
        assert_eq!(*map.viewport(), viewport);
    }

    #[test]
    fn switching_location_stops_previous_animation() {
        let (mut map, locations) = presenter();
        let now = Instant::now();

        map.show_detail(content("Barista"), &locations[1], now);
        map.show_detail(content("Baskin Robins"), &locations[2], now);

        let previous = locations[1].marker().unwrap();
        let current = locations[2].marker().unwrap();
        assert_eq!(map.markers()[previous.0].animation, None);
        assert_eq!(map.markers()[current.0].animation, Some(Animation::Bounce));
        assert_eq!(map.overlay().anchor, Some(current));
    }

    #[test]
    fn camera_moves_only_after_the_delay() {
        let (mut map, locations) = presenter();
        let now = Instant::now();
        let fitted = *map.viewport();

        map.show_detail(content("Barista"), &locations[1], now);
        map.tick(now + Duration::from_millis(100));
        assert_eq!(*map.viewport(), fitted);

        map.tick(now + Duration::from_millis(500));
        assert_eq!(
            *map.viewport(),
            Viewport::at_zoom(locations[1].position(), 16)
        );
    }

    #[test]
    fn close_overlay_stops_bounce_and_allows_reopening() {
        let (mut map, locations) = presenter();
        let now = Instant::now();

        map.show_detail(content("Barista"), &locations[1], now);
        map.close_overlay();

        let marker = locations[1].marker().unwrap();
        assert!(!map.overlay().is_open());
        assert_eq!(map.markers()[marker.0].animation, None);

        map.show_detail(content("Barista again"), &locations[1], now);
        assert_eq!(map.overlay().content.as_ref().unwrap().title, "Barista again");
    }

    #[test]
    fn drop_animation_settles_on_tick() {
        let (mut map, _) = presenter();
        map.tick(Instant::now() + Duration::from_secs(1));
        assert!(map.markers().iter().all(|m| m.animation.is_none()));
    }

    #[test]
    fn marker_hit_test_uses_last_canvas_area() {
        let (mut map, locations) = presenter();
        assert_eq!(map.marker_at(0, 0), None);

        let area = Rect::new(0, 0, 80, 24);
        map.set_canvas_area(area);

        let (x, y) = map.viewport().project(locations[3].position(), area).unwrap();
        assert_eq!(map.marker_at(x, y), Some(LocationId(3)));
        assert_eq!(map.marker_at(x + 1, y), Some(LocationId(3)));

        let none = filter_locations(&locations, "be");
        map.render(&locations, Some(&none.visibility));
        let (x, y) = map.viewport().project(locations[3].position(), area).unwrap();
        assert_eq!(map.marker_at(x, y), None);
    }
}
