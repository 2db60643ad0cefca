//! Facility map link builder
//!
//! Thin wrapper over an external map service. The core has no contract with
//! it beyond "produce a link centered near a given point"; no networking
//! happens here.

use crate::config::MapConfig;

/// A map view centered on a coordinate at a zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl MapView {
    pub fn new(latitude: f64, longitude: f64, zoom: u8) -> Self {
        MapView {
            latitude,
            longitude,
            zoom,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        MapView::new(config.latitude, config.longitude, config.zoom)
    }

    /// Shareable OpenStreetMap link for this view.
    pub fn url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/#map={}/{:.4}/{:.4}",
            self.zoom, self.latitude, self.longitude
        )
    }

    /// Link pre-filtered to hospitals near the view center.
    pub fn hospital_search_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/search?query=hospital#map={}/{:.4}/{:.4}",
            self.zoom, self.latitude, self.longitude
        )
    }
}

impl Default for MapView {
    fn default() -> Self {
        MapView::from_config(&MapConfig::default())
    }
}
