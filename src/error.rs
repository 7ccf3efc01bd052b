// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type covering the fetch / extract / render pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport failure or non-success HTTP status from the Strava API.
    /// The message carries the status and raw body where available.
    #[error("Strava API error: {0}")]
    StravaApi(String),

    /// HTTP 429 from Strava.
    #[error("Strava rate limit exceeded")]
    RateLimited,

    /// A 2xx response whose body does not have the expected shape
    /// (e.g. a token response without `access_token`, or a listing
    /// payload shaped like an error object).
    #[error("Malformed Strava response: {0}")]
    MalformedResponse(String),

    /// A route encoding that does not decode.
    #[error("Polyline decode error: {0}")]
    Polyline(String),

    /// Failure writing the output artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AppError>;
