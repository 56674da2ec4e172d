//! Initial camera position

use serde::Serialize;

use crate::config::ViewConfig;
use crate::geometry::{Centroid, ZoomLevel};
use super::options::MapOptions;

/// Initial view state of the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: ZoomLevel,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl ViewState {
    /// Center the view on `centroid` at `zoom`
    ///
    /// The zoom is passed through untouched, even when it lies outside
    /// `[min_zoom, max_zoom]`; clamping is left to the renderer.
    pub fn new(centroid: Centroid, zoom: ZoomLevel, limits: &ViewConfig, options: &MapOptions) -> Self {
        ViewState {
            longitude: centroid.longitude(),
            latitude: centroid.latitude(),
            zoom,
            min_zoom: limits.min_zoom,
            max_zoom: limits.max_zoom,
            pitch: options.pitch,
            bearing: options.bearing,
        }
    }
}
