// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GPS point extraction from activity route encodings.

use crate::error::{AppError, Result};
use crate::models::{ActivityDetail, GeoPoint};

/// Strava encodes polylines at precision 5.
const POLYLINE_PRECISION: u32 = 5;

/// Extract GPS coordinates from activity data, preferring the
/// full-resolution polyline over the summary encoding.
///
/// Each activity contributes the points of at most one encoding: the full
/// polyline when present, otherwise the summary polyline, otherwise
/// nothing. Output order follows activity order, and duplicates are kept
/// (overlapping routes are what give the heatmap its density).
pub fn extract_gps_points(activities: &[ActivityDetail]) -> Result<Vec<GeoPoint>> {
    let mut gps_points = Vec::new();
    let mut full_polyline_count = 0u32;
    let mut summary_polyline_count = 0u32;

    for activity in activities {
        let Some(map) = &activity.map else {
            continue;
        };

        if let Some(encoded) = map.polyline.as_deref() {
            append_decoded(encoded, &mut gps_points)?;
            full_polyline_count += 1;
        } else if let Some(encoded) = map.summary_polyline.as_deref() {
            append_decoded(encoded, &mut gps_points)?;
            summary_polyline_count += 1;
        }
    }

    tracing::info!(
        points = gps_points.len(),
        full_polyline = full_polyline_count,
        summary_polyline = summary_polyline_count,
        "Extracted GPS points"
    );
    Ok(gps_points)
}

/// Decode one encoding and append its points in order.
fn append_decoded(encoded: &str, gps_points: &mut Vec<GeoPoint>) -> Result<()> {
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| AppError::Polyline(e.to_string()))?;
    gps_points.extend(line.coords().copied().map(GeoPoint::from));
    Ok(())
}
