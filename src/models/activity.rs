// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API response models.

use serde::Deserialize;

/// OAuth credentials for one run. The refresh token is exchanged for a
/// short-lived access token at the start of each fetch; nothing is
/// persisted between runs.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Strava OAuth client ID
    pub client_id: String,
    /// Strava OAuth client secret
    pub client_secret: String,
    /// Long-lived refresh token
    pub refresh_token: String,
}

/// Token refresh response from Strava. Only the access token is consumed;
/// the new refresh token is not persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Summary activity from the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySummary {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    pub name: String,
}

/// Detailed activity from the per-activity endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityDetail {
    pub id: u64,
    pub name: String,
    /// Route encodings; absent for activities without GPS data.
    pub map: Option<ActivityMap>,
}

/// Activity map data with polylines. Either, both, or neither encoding
/// may be present.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityMap {
    /// Full-resolution encoding (detail endpoint only)
    pub polyline: Option<String>,
    /// Lower-resolution fallback encoding
    pub summary_polyline: Option<String>,
}

/// Listing endpoint payload. Strava sometimes answers a 2xx listing
/// request with an error object instead of the documented summary array
/// (typically when rate limited), so the body is modeled as a variant
/// rather than assumed to be a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListingResponse {
    Activities(Vec<ActivitySummary>),
    Error(serde_json::Value),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_parses_summary_array() {
        let body = r#"[{"id": 101, "name": "Morning Ride"}, {"id": 102, "name": "Lunch Run"}]"#;
        let listing: ListingResponse = serde_json::from_str(body).unwrap();
        match listing {
            ListingResponse::Activities(activities) => {
                assert_eq!(activities.len(), 2);
                assert_eq!(activities[0].id, 101);
                assert_eq!(activities[1].name, "Lunch Run");
            }
            ListingResponse::Error(_) => panic!("expected activities"),
        }
    }

    #[test]
    fn test_listing_falls_back_to_error_payload() {
        let body = r#"{"message": "Rate Limit Exceeded", "errors": []}"#;
        let listing: ListingResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(listing, ListingResponse::Error(_)));
    }

    #[test]
    fn test_listing_rejects_malformed_entries() {
        // A list whose entries are not activity records lands in the
        // error arm instead of faulting.
        let body = r#"["unexpected", "strings"]"#;
        let listing: ListingResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(listing, ListingResponse::Error(_)));
    }

    #[test]
    fn test_detail_without_map() {
        let body = r#"{"id": 7, "name": "Pool Swim"}"#;
        let detail: ActivityDetail = serde_json::from_str(body).unwrap();
        assert!(detail.map.is_none());
    }

    #[test]
    fn test_detail_with_partial_map() {
        let body = r#"{"id": 8, "name": "Hill Repeats",
                       "map": {"polyline": null, "summary_polyline": "abc"}}"#;
        let detail: ActivityDetail = serde_json::from_str(body).unwrap();
        let map = detail.map.unwrap();
        assert!(map.polyline.is_none());
        assert_eq!(map.summary_polyline.as_deref(), Some("abc"));
    }

    #[test]
    fn test_token_response_requires_access_token() {
        let ok: TokenResponse =
            serde_json::from_str(r#"{"access_token": "tok", "expires_at": 123}"#).unwrap();
        assert_eq!(ok.access_token, "tok");

        let err = serde_json::from_str::<TokenResponse>(r#"{"expires_at": 123}"#);
        assert!(err.is_err());
    }
}
