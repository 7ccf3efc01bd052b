// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the fetch / extract / render pipeline stages.

pub mod extractor;
pub mod heatmap;
pub mod strava;

pub use extractor::extract_gps_points;
pub use heatmap::{create_density_heatmap, DensityMap, HeatmapOptions};
pub use strava::StravaClient;
