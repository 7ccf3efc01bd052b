// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava activity heatmap generator.
//!
//! This crate fetches activities from the Strava API, decodes their route
//! polylines into GPS coordinates, and renders a density heatmap to a
//! static HTML file. The pipeline is strictly sequential:
//! fetch -> extract -> render, with return values as the only coupling.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
