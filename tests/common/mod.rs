// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests: a Strava client aimed at a
//! wiremock server, canned endpoint mocks, and polyline fixtures.

use std::time::Duration;
use strava_heatmap::models::Credentials;
use strava_heatmap::services::StravaClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials {
        client_id: "test_client_id".to_string(),
        client_secret: "test_client_secret".to_string(),
        refresh_token: "test_refresh_token".to_string(),
    }
}

/// Client wired to the mock server, with pacing disabled so tests run fast.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> StravaClient {
    StravaClient::with_base_urls(
        test_credentials(),
        format!("{}/api/v3", server.uri()),
        format!("{}/oauth/token", server.uri()),
    )
    .with_detail_fetch_delay(Duration::ZERO)
}

/// Mount a successful token refresh response.
#[allow(dead_code)]
pub async fn mount_token_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test_access_token",
            "refresh_token": "rotated_refresh_token",
            "expires_at": 1924992000u64
        })))
        .mount(server)
        .await;
}

/// Encode `(lat, lon)` pairs at Strava's precision.
#[allow(dead_code)]
pub fn encode_polyline(points: &[(f64, f64)]) -> String {
    let coords = points
        .iter()
        .map(|&(lat, lon)| geo_types::Coord { x: lon, y: lat });
    polyline::encode_coordinates(coords, 5).expect("fixture points should encode")
}
