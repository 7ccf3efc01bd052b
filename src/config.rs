// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::models::{Credentials, GeoPoint};
use std::env;
use std::path::PathBuf;

/// Default output filename for the rendered heatmap.
pub const DEFAULT_OUTPUT_FILE: &str = "strava_heatmap.html";

/// Maximum number of activities to fetch detail for when `MAX_DETAILED`
/// is not set.
pub const DEFAULT_MAX_DETAILED: u32 = 100;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth credentials
    pub credentials: Credentials,
    /// Maximum number of activities to fetch detailed data for
    pub max_detailed: u32,
    /// Map center for the rendered heatmap
    pub map_center: GeoPoint,
    /// Output HTML path
    pub output_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            credentials: Credentials {
                client_id: require("STRAVA_CLIENT_ID")?,
                client_secret: require("STRAVA_CLIENT_SECRET")?,
                refresh_token: require("STRAVA_REFRESH_TOKEN")?,
            },
            max_detailed: match env::var("MAX_DETAILED") {
                Ok(v) => v
                    .parse()
                    .map_err(|_| ConfigError::Invalid("MAX_DETAILED", v))?,
                Err(_) => DEFAULT_MAX_DETAILED,
            },
            map_center: GeoPoint::new(
                parse_f64("MAP_CENTER_LAT")?,
                parse_f64("MAP_CENTER_LON")?,
            ),
            output_file: env::var("OUTPUT_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .map_err(|_| ConfigError::Missing(name))
}

fn parse_f64(name: &'static str) -> Result<f64, ConfigError> {
    let raw = require(name)?;
    raw.parse().map_err(|_| ConfigError::Invalid(name, raw))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_required_vars() {
        env::set_var("STRAVA_CLIENT_ID", "test_id");
        env::set_var("STRAVA_CLIENT_SECRET", "test_secret");
        env::set_var("STRAVA_REFRESH_TOKEN", "test_refresh");
        env::set_var("MAP_CENTER_LAT", "45.0");
        env::set_var("MAP_CENTER_LON", "-122.0");
    }

    // Env vars are process-global, so the valid and invalid cases run in
    // one test to avoid racing parallel test threads.
    #[test]
    fn test_config_from_env() {
        set_required_vars();
        env::remove_var("MAX_DETAILED");
        env::remove_var("OUTPUT_FILE");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.credentials.client_id, "test_id");
        assert_eq!(config.credentials.refresh_token, "test_refresh");
        assert_eq!(config.max_detailed, DEFAULT_MAX_DETAILED);
        assert_eq!(config.map_center, GeoPoint::new(45.0, -122.0));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));

        env::set_var("MAP_CENTER_LAT", "north-ish");
        let err = Config::from_env().expect_err("should reject unparseable latitude");
        assert!(matches!(err, ConfigError::Invalid("MAP_CENTER_LAT", _)));
        env::set_var("MAP_CENTER_LAT", "45.0");
    }
}
