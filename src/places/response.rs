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

//! Venue payload validation and field extraction.
//!
//! A payload is checked in a fixed order (payload, `meta`, `meta.code`,
//! `response`, `response.venue`) and the first missing field is reported.
//! Optional venue fields fall back to fixed placeholders; empty strings are
//! treated the same as missing ones.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{Detail, LocationId},
    places::{MissingField, PlacesError},
};

pub(crate) const PHOTO_SIZE: &str = "height60";
pub(crate) const PLACEHOLDER_PHOTO: &str = "img/foursquare.png";
pub(crate) const NO_PHONE: &str = "No Phone provided";
pub(crate) const DEFAULT_SOURCE_URL: &str = "https://foursquare.com/";
pub(crate) const NO_ADDRESS: [&str; 2] = ["No Address", "provided"];

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Venue {
    best_photo: Option<Photo>,
    contact: Option<Contact>,
    canonical_url: Option<String>,
    location: Option<VenueLocation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Photo {
    prefix: Option<String>,
    suffix: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Contact {
    phone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VenueLocation {
    formatted_address: Option<Vec<String>>,
}

/// Checks the payload structure and returns the venue object.
pub(crate) fn validate_response(payload: &Value) -> Result<&Value, MissingField> {
    let payload = present(Some(payload)).ok_or(MissingField::Payload)?;
    let meta = present(payload.get("meta")).ok_or(MissingField::Meta)?;
    present(meta.get("code")).ok_or(MissingField::MetaCode)?;
    let response = present(payload.get("response")).ok_or(MissingField::Response)?;
    present(response.get("venue")).ok_or(MissingField::Venue)
}

/// Validates the payload and builds the [`Detail`] for `location`.
pub(crate) fn extract_detail(location: LocationId, payload: &Value) -> Result<Detail, PlacesError> {
    let venue = validate_response(payload).map_err(PlacesError::MalformedResponse)?;
    let venue = Venue::deserialize(venue).map_err(|e| PlacesError::InvalidVenue(e.to_string()))?;

    let best_photo = venue
        .best_photo
        .and_then(|photo| Some((non_empty(photo.prefix)?, non_empty(photo.suffix)?)))
        .map(|(prefix, suffix)| format!("{prefix}{PHOTO_SIZE}{suffix}"))
        .unwrap_or_else(|| PLACEHOLDER_PHOTO.to_string());

    let phone = venue
        .contact
        .and_then(|contact| non_empty(contact.phone))
        .unwrap_or_else(|| NO_PHONE.to_string());

    let source_url = non_empty(venue.canonical_url).unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string());

    let address = venue
        .location
        .and_then(|location| location.formatted_address)
        .filter(|lines| !lines.is_empty())
        .unwrap_or_else(|| NO_ADDRESS.iter().map(|line| line.to_string()).collect());

    Ok(Detail {
        location,
        best_photo,
        phone,
        source_url,
        address,
    })
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(venue: Value) -> Value {
        json!({
            "meta": { "code": 200, "requestId": "5a0f" },
            "response": { "venue": venue }
        })
    }

    fn full_venue() -> Value {
        json!({
            "id": "4ba06f61f964a520986d37e3",
            "name": "Barista",
            "bestPhoto": {
                "prefix": "https://igx.4sqi.net/img/general/",
                "suffix": "/123_abc.jpg"
            },
            "contact": { "phone": "+94112345678" },
            "canonicalUrl": "https://foursquare.com/v/barista/4ba06f61f964a520986d37e3",
            "location": {
                "formattedAddress": ["Flower Road", "Colombo 07", "Sri Lanka"]
            }
        })
    }

    #[test]
    fn validation_reports_first_missing_field_in_order() {
        assert_eq!(validate_response(&Value::Null), Err(MissingField::Payload));
        assert_eq!(validate_response(&json!({})), Err(MissingField::Meta));
        assert_eq!(
            validate_response(&json!({ "meta": {} })),
            Err(MissingField::MetaCode)
        );
        assert_eq!(
            validate_response(&json!({ "meta": { "code": 200 } })),
            Err(MissingField::Response)
        );
        assert_eq!(
            validate_response(&json!({ "meta": { "code": 200 }, "response": {} })),
            Err(MissingField::Venue)
        );
    }

    #[test]
    fn validation_short_circuits_on_first_failure() {
        // Both meta.code and response are missing; only the first is reported.
        let err = validate_response(&json!({ "meta": { "errorType": "x" } })).unwrap_err();
        assert_eq!(err, MissingField::MetaCode);
    }

    #[test]
    fn missing_response_object_is_malformed() {
        let err = extract_detail(LocationId(0), &json!({ "meta": { "code": 200 } })).unwrap_err();
        assert!(matches!(
            err,
            PlacesError::MalformedResponse(MissingField::Response)
        ));
        assert!(err.to_string().contains("no response object"));
    }

    #[test]
    fn full_venue_is_extracted() {
        let detail = extract_detail(LocationId(1), &payload(full_venue())).unwrap();

        assert_eq!(detail.location, LocationId(1));
        assert_eq!(
            detail.best_photo,
            "https://igx.4sqi.net/img/general/height60/123_abc.jpg"
        );
        assert_eq!(detail.phone, "+94112345678");
        assert_eq!(
            detail.source_url,
            "https://foursquare.com/v/barista/4ba06f61f964a520986d37e3"
        );
        assert_eq!(detail.address, vec!["Flower Road", "Colombo 07", "Sri Lanka"]);
    }

    #[test]
    fn venue_without_best_photo_uses_placeholder() {
        let mut venue = full_venue();
        venue.as_object_mut().unwrap().remove("bestPhoto");

        let detail = extract_detail(LocationId(0), &payload(venue)).unwrap();
        assert_eq!(detail.best_photo, PLACEHOLDER_PHOTO);
    }

    #[test]
    fn photo_needs_both_prefix_and_suffix() {
        let mut venue = full_venue();
        venue["bestPhoto"] = json!({ "prefix": "https://igx.4sqi.net/img/general/", "suffix": "" });

        let detail = extract_detail(LocationId(0), &payload(venue)).unwrap();
        assert_eq!(detail.best_photo, PLACEHOLDER_PHOTO);
    }

    #[test]
    fn empty_formatted_address_uses_placeholder_lines() {
        let mut venue = full_venue();
        venue["location"] = json!({ "formattedAddress": [] });

        let detail = extract_detail(LocationId(0), &payload(venue)).unwrap();
        assert_eq!(detail.address, vec!["No Address", "provided"]);
    }

    #[test]
    fn sparse_venue_falls_back_everywhere() {
        let detail = extract_detail(LocationId(4), &payload(json!({ "id": "x" }))).unwrap();

        assert_eq!(detail.best_photo, PLACEHOLDER_PHOTO);
        assert_eq!(detail.phone, NO_PHONE);
        assert_eq!(detail.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(detail.address, vec!["No Address", "provided"]);
    }

    #[test]
    fn empty_phone_and_url_count_as_missing() {
        let mut venue = full_venue();
        venue["contact"] = json!({ "phone": "" });
        venue["canonicalUrl"] = json!("");

        let detail = extract_detail(LocationId(0), &payload(venue)).unwrap();
        assert_eq!(detail.phone, NO_PHONE);
        assert_eq!(detail.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn wrongly_typed_venue_field_is_invalid() {
        let mut venue = full_venue();
        venue["contact"] = json!({ "phone": 112345678 });

        let err = extract_detail(LocationId(0), &payload(venue)).unwrap_err();
        assert!(matches!(err, PlacesError::InvalidVenue(_)));
    }
}
