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

//! Selection to detail coordination.
//!
//! The coordinator turns a location selection (from the search list or a map
//! marker) into a background fetch, and turns the fetched detail into overlay
//! content for the map. Every fetch is tagged with a [`RequestId`]; only the
//! response to the most recent selection is accepted, so a slow response for
//! an earlier selection can never overwrite a newer one.

use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    map::OverlayContent,
    model::{Detail, Location, LocationId},
    tasks::AppTask,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RequestId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectionSource {
    List,
    Marker,
}

#[derive(Default)]
pub(crate) struct DetailCoordinator {
    last_issued: u64,
    latest: Option<RequestId>,
    detail: Option<Detail>,
}

impl DetailCoordinator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Requests the detail of `location` from the task worker.
    ///
    /// Never waits for the fetch and never blocks later selections. The
    /// request only becomes the latest one once the worker has accepted it.
    ///
    /// # Errors
    ///
    /// Returns an error if the task worker is no longer running.
    pub(crate) fn on_select(
        &mut self,
        id: LocationId,
        location: &Location,
        task_tx: &Sender<AppTask>,
    ) -> Result<RequestId> {
        let request = RequestId(self.last_issued + 1);

        task_tx
            .send(AppTask::FetchDetail {
                request,
                location: id,
                venue_id: location.venue_id().to_string(),
            })
            .context("Task worker is not running")?;

        self.last_issued = request.0;
        self.latest = Some(request);
        debug!(?request, location = location.name(), "detail requested");

        Ok(request)
    }

    /// Stores `detail` if it answers the latest request.
    ///
    /// Returns the stored detail, or `None` if the response was stale.
    pub(crate) fn on_detail_ready(&mut self, request: RequestId, detail: Detail) -> Option<&Detail> {
        if !self.is_latest(request) {
            debug!(?request, "discarding stale detail");
            return None;
        }

        self.latest = None;
        self.detail = Some(detail);
        self.detail.as_ref()
    }

    /// Whether a failed request should be reported. Failures of superseded
    /// requests are not.
    pub(crate) fn on_detail_failed(&mut self, request: RequestId) -> bool {
        if !self.is_latest(request) {
            return false;
        }

        self.latest = None;
        true
    }

    pub(crate) fn is_fetching(&self) -> bool {
        self.latest.is_some()
    }

    #[cfg(test)]
    pub(crate) fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    fn is_latest(&self, request: RequestId) -> bool {
        self.latest == Some(request)
    }
}

/// Builds the overlay shown for `detail`.
pub(crate) fn overlay_content(detail: &Detail, location: &Location) -> OverlayContent {
    OverlayContent {
        title: location.name().to_string(),
        photo_url: detail.best_photo.clone(),
        address: detail.address.clone(),
        phone: detail.phone.clone(),
        source_url: detail.source_url.clone(),
    }
}
