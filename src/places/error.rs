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

use thiserror::Error;

/// The first field found missing while validating a venue payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum MissingField {
    #[error("no data object")]
    Payload,

    #[error("no meta object")]
    Meta,

    #[error("no code available")]
    MetaCode,

    #[error("no response object")]
    Response,

    #[error("no venue information on response object")]
    Venue,
}

#[derive(Debug, Error)]
pub(crate) enum PlacesError {
    #[error("{}", network_message(.status, .description))]
    Network {
        status: Option<u16>,
        description: Option<String>,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(MissingField),

    #[error("invalid venue in response: {0}")]
    InvalidVenue(String),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl PlacesError {
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        Self::Network {
            status: err.status().map(|s| s.as_u16()),
            description: Some(err.to_string()),
        }
    }
}

fn network_message(status: &Option<u16>, description: &Option<String>) -> String {
    match (status, description) {
        (Some(status), Some(description)) => {
            format!("error status: {status}, message: {description}")
        }
        (None, Some(description)) => {
            format!("error status: not specified, message: {description}")
        }
        (_, None) => "unknown error occurred".to_string(),
    }
}
