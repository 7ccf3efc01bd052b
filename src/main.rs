// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava heatmap CLI.
//!
//! Fetches up to `MAX_DETAILED` activities for the configured athlete and
//! writes a density heatmap of their routes to `OUTPUT_FILE`.

use strava_heatmap::config::Config;
use strava_heatmap::services::{create_density_heatmap, extract_gps_points, StravaClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(
        max_detailed = config.max_detailed,
        output = %config.output_file.display(),
        "Starting Strava heatmap generation"
    );

    let client = StravaClient::new(config.credentials.clone());
    let activities = client.fetch_detailed_activities(config.max_detailed).await;

    let points = extract_gps_points(&activities)?;
    create_density_heatmap(points, config.map_center, &config.output_file)?;

    tracing::info!("Heatmap generation complete");
    Ok(())
}

/// Initialize logging with env-filter overrides.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_heatmap=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
