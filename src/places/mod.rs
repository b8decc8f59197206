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

//! Venue detail lookups against the Foursquare venues API.
//!
//! * [`client`]: HTTP access to the venues endpoint.
//! * [`response`]: structural validation of the payload and extraction of the
//!   fields shown in the detail overlay.
//! * [`error`]: error types surfaced to the user.

mod client;
mod error;
mod response;

pub(crate) use client::PlacesClient;
pub(crate) use error::{MissingField, PlacesError};
