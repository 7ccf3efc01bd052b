// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Density heatmap rendering to a self-contained HTML page.
//!
//! The output embeds Leaflet and the Leaflet.heat plugin from CDN, the
//! full point set, and a fixed legend overlay. No server is involved;
//! the file opens directly in a browser.

use crate::error::Result;
use crate::models::GeoPoint;
use std::path::Path;

/// Initial zoom level for the rendered map.
pub const DEFAULT_ZOOM: u8 = 11;

/// Heat layer presentation constants. Fixed, not derived from data.
#[derive(Debug, Clone)]
pub struct HeatmapOptions {
    /// Point influence radius in map pixels
    pub radius: u32,
    /// Blur factor
    pub blur: u32,
    /// Minimum visual opacity
    pub min_opacity: f64,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            radius: 8,
            blur: 7,
            min_opacity: 0.4,
        }
    }
}

/// In-memory heatmap document. Build, optionally compose additional HTML
/// overlays onto it, then [`save`](DensityMap::save) it.
#[derive(Debug, Clone)]
pub struct DensityMap {
    points: Vec<GeoPoint>,
    center: GeoPoint,
    zoom: u8,
    options: HeatmapOptions,
    overlays: Vec<String>,
}

/// Page skeleton. Placeholder tokens are substituted in `to_html`; the
/// tile URL's `{z}/{x}/{y}` belongs to Leaflet and passes through as-is.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Strava Activity Heatmap</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css"
    crossorigin="anonymous" referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js"
    crossorigin="anonymous" referrerpolicy="no-referrer"></script>
  <script src="https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
  <style>
    html, body { height: 100%; margin: 0; }
    #map { height: 100%; width: 100%; }
  </style>
</head>
<body>
  <div id="map"></div>
__OVERLAYS__
  <script>
    var map = L.map('map').setView([__CENTER_LAT__, __CENTER_LON__], __ZOOM__);
    L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }).addTo(map);
    L.heatLayer(__POINTS__, {
      radius: __RADIUS__,
      blur: __BLUR__,
      minOpacity: __MIN_OPACITY__
    }).addTo(map);
  </script>
</body>
</html>
"#;

/// Fixed legend overlay embedded in every output.
const LEGEND_HTML: &str = r#"  <div style="position: fixed; top: 10px; right: 10px; width: 120px; height: 90px;
      background-color: white; border: 2px solid grey; z-index: 9999;
      font-size: 12px; padding: 8px;">
    <p><b>Activity Density</b></p>
    <div style="background: linear-gradient(to right, blue, green, yellow, red);
        height: 20px; width: 100px; margin: 5px 0;"></div>
    <div style="display: flex; justify-content: space-between; width: 100px;">
      <span>Low</span>
      <span>High</span>
    </div>
  </div>"#;

impl DensityMap {
    /// Create a heatmap document centered at the given coordinate with
    /// default zoom and heat layer options. The legend is always present.
    pub fn new(points: Vec<GeoPoint>, center: GeoPoint) -> Self {
        Self {
            points,
            center,
            zoom: DEFAULT_ZOOM,
            options: HeatmapOptions::default(),
            overlays: vec![LEGEND_HTML.to_string()],
        }
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_options(mut self, options: HeatmapOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a raw HTML element to the page body, before the map script.
    /// Lets callers compose extra overlays before saving.
    pub fn add_element(&mut self, html: impl Into<String>) {
        self.overlays.push(html.into());
    }

    /// Render the full HTML document.
    pub fn to_html(&self) -> String {
        PAGE_TEMPLATE
            .replace("__OVERLAYS__", &self.overlays.join("\n"))
            .replace("__CENTER_LAT__", &self.center.lat.to_string())
            .replace("__CENTER_LON__", &self.center.lon.to_string())
            .replace("__ZOOM__", &self.zoom.to_string())
            .replace("__POINTS__", &self.points_json())
            .replace("__RADIUS__", &self.options.radius.to_string())
            .replace("__BLUR__", &self.options.blur.to_string())
            .replace("__MIN_OPACITY__", &self.options.min_opacity.to_string())
    }

    /// Write the document to `path`. This is the operation's only side
    /// effect; the map object itself stays usable afterwards.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_html())?;
        tracing::info!(path = %path.as_ref().display(), "Heatmap saved");
        Ok(())
    }

    /// Heat layer input as a JSON `[lat, lon]` array.
    fn points_json(&self) -> String {
        let coords: Vec<[f64; 2]> = self.points.iter().map(|p| [p.lat, p.lon]).collect();
        serde_json::to_string(&coords).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Create an interactive heatmap from GPS coordinates and write it to
/// `output_file`. Returns the in-memory map for further composition.
pub fn create_density_heatmap<P: AsRef<Path>>(
    points: Vec<GeoPoint>,
    center: GeoPoint,
    output_file: P,
) -> Result<DensityMap> {
    let map = DensityMap::new(points, center);
    map.save(output_file)?;
    Ok(map)
}
