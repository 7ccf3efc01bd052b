// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod point;

pub use activity::{ActivityDetail, ActivityMap, ActivitySummary, Credentials, ListingResponse};
pub use point::GeoPoint;
