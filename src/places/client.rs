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

//! HTTP client for the Foursquare venues endpoint.

use std::time::Duration;

use reqwest::{Client, header::CACHE_CONTROL};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::PlacesConfig,
    model::{Detail, LocationId},
    places::{PlacesError, response::extract_detail},
};

/// Fetches venue detail for a location's venue id.
///
/// Responses are never cached and failed requests are never retried; the user
/// retries by selecting the location again.
pub(crate) struct PlacesClient {
    client: Client,
    endpoint: String,
    client_id: String,
    client_secret: String,
    api_version: String,
}

impl PlacesClient {
    /// Creates a client from the places section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub(crate) fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(PlacesError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// URL of the venue resource, without the credential query string.
    pub(crate) fn venue_url(&self, venue_id: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), venue_id)
    }

    /// Fetches, validates and extracts the detail of one venue.
    ///
    /// # Errors
    ///
    /// * [`PlacesError::Network`] on transport failure, a non-2xx status, or
    ///   a body that is not JSON.
    /// * [`PlacesError::MalformedResponse`] when a required field is missing.
    /// * [`PlacesError::InvalidVenue`] when venue fields have unexpected types.
    pub(crate) async fn fetch_detail(
        &self,
        location: LocationId,
        venue_id: &str,
    ) -> Result<Detail, PlacesError> {
        debug!(venue_id, "fetching venue detail");

        let response = self
            .client
            .get(self.venue_url(venue_id))
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("v", self.api_version.as_str()),
            ])
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(PlacesError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::Network {
                status: Some(status.as_u16()),
                description: status.canonical_reason().map(str::to_string),
            });
        }

        let payload: Value = response.json().await.map_err(|e| PlacesError::Network {
            status: Some(status.as_u16()),
            description: Some(format!("parse error: {e}")),
        })?;

        let detail = extract_detail(location, &payload)?;
        debug!(venue_id, "venue detail ready");

        Ok(detail)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
