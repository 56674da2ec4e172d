//! User-facing map styling options

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{GeoDeckError, GeoDeckResult};

/// Layer types the renderer knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerType {
    GeoJsonLayer,
}

impl LayerType {
    /// Names accepted on the command line
    pub const NAMES: [&'static str; 1] = ["GeoJsonLayer"];

    pub fn name(&self) -> &'static str {
        match self {
            LayerType::GeoJsonLayer => "GeoJsonLayer",
        }
    }
}

impl FromStr for LayerType {
    type Err = GeoDeckError;

    fn from_str(s: &str) -> GeoDeckResult<Self> {
        match s {
            "GeoJsonLayer" => Ok(LayerType::GeoJsonLayer),
            other => Err(GeoDeckError::ConfigurationError(format!(
                "Unsupported layer type '{}', expected one of {:?}",
                other,
                LayerType::NAMES
            ))),
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Build a color from exactly three channel values
    pub fn from_slice(channels: &[u8]) -> GeoDeckResult<Self> {
        match channels {
            [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
            _ => Err(GeoDeckError::ConfigurationError(format!(
                "A color needs exactly 3 channels (R G B), got {}",
                channels.len()
            ))),
        }
    }
}

/// Styling and camera options for one map
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub layer_type: LayerType,
    /// Feature property holding the extrusion height
    pub elevation_property: String,
    pub elevation_scale: f64,
    pub fill_color: Rgb,
    pub line_color: Rgb,
    pub auto_highlight: bool,
    pub pickable: bool,
    pub stroked: bool,
    pub filled: bool,
    pub wireframe: bool,
    pub extruded: bool,
    /// Fraction of each cell covered, in [0, 1]
    pub coverage: f64,
    /// Camera tilt in degrees, in [0, 90]
    pub pitch: f64,
    /// Camera rotation from true north in degrees, in [0, 360)
    pub bearing: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            layer_type: LayerType::GeoJsonLayer,
            elevation_property: "elevation".to_string(),
            elevation_scale: 1.0,
            fill_color: Rgb::new(255, 0, 0),
            line_color: Rgb::new(0, 0, 255),
            auto_highlight: true,
            pickable: true,
            stroked: false,
            filled: true,
            wireframe: true,
            extruded: true,
            coverage: 1.0,
            pitch: 45.0,
            bearing: 0.0,
        }
    }
}

impl MapOptions {
    /// Check that every numeric option lies in its documented range
    ///
    /// # Returns
    /// `ConfigurationError` naming the first offending option
    pub fn validate(&self) -> GeoDeckResult<()> {
        if self.elevation_property.is_empty() {
            return Err(GeoDeckError::ConfigurationError(
                "elevation-property must not be empty".to_string(),
            ));
        }
        if !self.elevation_scale.is_finite() {
            return Err(GeoDeckError::ConfigurationError(format!(
                "elevation-scale must be a finite number, got {}", self.elevation_scale
            )));
        }
        if !(0.0..=1.0).contains(&self.coverage) {
            return Err(GeoDeckError::ConfigurationError(format!(
                "coverage must be within [0, 1], got {}", self.coverage
            )));
        }
        if !(0.0..=90.0).contains(&self.pitch) {
            return Err(GeoDeckError::ConfigurationError(format!(
                "pitch must be within [0, 90], got {}", self.pitch
            )));
        }
        if !(0.0..360.0).contains(&self.bearing) {
            return Err(GeoDeckError::ConfigurationError(format!(
                "bearing must be within [0, 360), got {}", self.bearing
            )));
        }
        Ok(())
    }
}
