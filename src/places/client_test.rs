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

//! Tests for `PlacesClient` against a local `wiremock` server.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::places::MissingField;

const VENUE_ID: &str = "4c26f4ed3703d13a175da636";

fn test_config(endpoint: &str) -> PlacesConfig {
    PlacesConfig {
        endpoint: format!("{endpoint}/v2/venues/"),
        client_id: "test-id".to_string(),
        client_secret: "test-secret".to_string(),
        api_version: "20170801".to_string(),
        timeout_secs: Some(5),
    }
}

fn test_client(server: &MockServer) -> PlacesClient {
    PlacesClient::new(&test_config(&server.uri())).expect("failed to build test PlacesClient")
}

fn venue_json() -> serde_json::Value {
    json!({
        "meta": { "code": 200 },
        "response": {
            "venue": {
                "name": "Beverly Street",
                "bestPhoto": { "prefix": "https://img/", "suffix": "/p.jpg" },
                "contact": { "phone": "+94 11 250 0000" },
                "canonicalUrl": "https://foursquare.com/v/beverly-street",
                "location": { "formattedAddress": ["Galle Road", "Colombo"] }
            }
        }
    })
}

#[test]
fn venue_url_joins_endpoint_and_id() {
    let mut config = test_config("https://api.example.com");
    let client = PlacesClient::new(&config).unwrap();
    assert_eq!(
        client.venue_url("abc"),
        "https://api.example.com/v2/venues/abc"
    );

    config.endpoint = "https://api.example.com/v2/venues".to_string();
    let client = PlacesClient::new(&config).unwrap();
    assert_eq!(
        client.venue_url("abc"),
        "https://api.example.com/v2/venues/abc"
    );
}

#[tokio::test]
async fn fetch_detail_sends_credentials_and_extracts_venue() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/venues/{VENUE_ID}")))
        .and(query_param("client_id", "test-id"))
        .and(query_param("client_secret", "test-secret"))
        .and(query_param("v", "20170801"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(venue_json()))
        .expect(1)
        .mount(&server)
        .await;

    let detail = test_client(&server)
        .fetch_detail(LocationId(0), VENUE_ID)
        .await
        .expect("expected venue detail");

    assert_eq!(detail.location, LocationId(0));
    assert_eq!(detail.best_photo, "https://img/height60/p.jpg");
    assert_eq!(detail.phone, "+94 11 250 0000");
    assert_eq!(detail.source_url, "https://foursquare.com/v/beverly-street");
    assert_eq!(detail.address, vec!["Galle Road", "Colombo"]);
}

#[tokio::test]
async fn fetch_detail_reports_missing_response_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/venues/{VENUE_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meta": { "code": 200 } })))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_detail(LocationId(0), VENUE_ID).await;

    assert!(
        matches!(
            result,
            Err(PlacesError::MalformedResponse(MissingField::Response))
        ),
        "expected missing response object, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_detail_reports_http_status_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_detail(LocationId(0), VENUE_ID)
        .await
        .unwrap_err();

    assert!(
        matches!(err, PlacesError::Network { status: Some(404), .. }),
        "expected 404 network error, got: {err:?}"
    );
    assert_eq!(err.to_string(), "error status: 404, message: Not Found");
}

#[tokio::test]
async fn fetch_detail_reports_unparseable_body_as_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_detail(LocationId(0), VENUE_ID)
        .await
        .unwrap_err();

    match err {
        PlacesError::Network { status, description } => {
            assert_eq!(status, Some(200));
            assert!(description.unwrap_or_default().starts_with("parse error"));
        }
        other => panic!("expected network error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_detail_reports_unreachable_server() {
    // Nothing listens on port 1.
    let config = test_config("http://127.0.0.1:1");

    let client = PlacesClient::new(&config).unwrap();
    let err = client.fetch_detail(LocationId(0), VENUE_ID).await.unwrap_err();

    assert!(
        matches!(err, PlacesError::Network { status: None, description: Some(_) }),
        "expected transport error, got: {err:?}"
    );
}
