// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for fetching activities.
//!
//! Handles:
//! - Access token refresh at the start of each run
//! - Activity listing and per-activity detail retrieval
//! - Fixed pacing between detail requests (rate limit protection)
//! - Best-effort batch fetch that skips individual failures

use crate::error::{AppError, Result};
use crate::models::{ActivityDetail, Credentials, ListingResponse};
use crate::models::activity::TokenResponse;
use serde::Deserialize;
use std::time::Duration;

const STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";
const STRAVA_TOKEN_URL: &str = "https://www.strava.com/oauth/token";

/// Pause inserted after every detail fetch, success or failure. Strava's
/// rate limit is enforced purely through this fixed pacing.
pub const DETAIL_FETCH_DELAY: Duration = Duration::from_millis(100);

/// Emit a progress log every this many successful detail fetches.
const PROGRESS_INTERVAL: usize = 10;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    credentials: Credentials,
    detail_fetch_delay: Duration,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_urls(
            credentials,
            STRAVA_API_BASE.to_string(),
            STRAVA_TOKEN_URL.to_string(),
        )
    }

    /// Create a client against non-default endpoints (tests point this at
    /// a local mock server).
    pub fn with_base_urls(credentials: Credentials, base_url: String, token_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token_url,
            credentials,
            detail_fetch_delay: DETAIL_FETCH_DELAY,
        }
    }

    /// Override the pause between detail fetches.
    pub fn with_detail_fetch_delay(mut self, delay: Duration) -> Self {
        self.detail_fetch_delay = delay;
        self
    }

    /// Exchange the refresh token for a short-lived access token.
    pub async fn refresh_access_token(&self) -> Result<TokenResponse> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("refresh_token", self.credentials.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token refresh request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Request one page of activity summaries.
    pub async fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ListingResponse> {
        let url = format!("{}/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Get a detailed activity by ID.
    pub async fn get_activity(&self, access_token: &str, activity_id: u64) -> Result<ActivityDetail> {
        let url = format!("{}/activities/{}", self.base_url, activity_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Fetch up to `max_detailed` activities with full detail, best effort.
    ///
    /// Token exchange failure and malformed listing responses abort the
    /// whole operation with an empty result; individual detail failures
    /// are logged and skipped. Nothing is retried. The returned records
    /// preserve listing order.
    pub async fn fetch_detailed_activities(&self, max_detailed: u32) -> Vec<ActivityDetail> {
        let token = match self.refresh_access_token().await {
            Ok(t) => t.access_token,
            Err(e) => {
                tracing::error!(error = %e, "Token refresh failed, aborting fetch");
                return Vec::new();
            }
        };

        let summaries = match self.list_activities(&token, 1, max_detailed).await {
            Ok(ListingResponse::Activities(summaries)) => summaries,
            Ok(ListingResponse::Error(payload)) => {
                tracing::warn!(
                    payload = %payload,
                    "Listing returned unexpected data format, likely rate limited"
                );
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch activity listing");
                return Vec::new();
            }
        };

        if summaries.is_empty() {
            tracing::info!("No activities found in listing");
            return Vec::new();
        }

        tracing::info!(count = summaries.len(), "Found activities, fetching detailed data");

        let mut detailed = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            match self.get_activity(&token, summary.id).await {
                Ok(detail) => {
                    tracing::debug!(activity_id = summary.id, name = %summary.name, "Fetched detail");
                    detailed.push(detail);
                    if detailed.len() % PROGRESS_INTERVAL == 0 {
                        tracing::info!(
                            fetched = detailed.len(),
                            total = summaries.len(),
                            "Detail fetch progress"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        activity_id = summary.id,
                        error = %e,
                        "Failed to fetch activity detail, skipping"
                    );
                }
            }

            tokio::time::sleep(self.detail_fetch_delay).await;
        }

        tracing::info!(
            requested = summaries.len(),
            retrieved = detailed.len(),
            "Detail fetch complete"
        );
        detailed
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!(body = %body, "Strava rate limit hit (429)");
                return Err(AppError::RateLimited);
            }

            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}
