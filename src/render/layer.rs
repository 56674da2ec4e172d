//! Data layer configuration

use geojson::JsonObject;
use serde::Serialize;

use super::options::{LayerType, MapOptions, Rgb};

/// Props for the single data layer, named as deck.gl expects them
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig<'a> {
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub id: String,
    pub data: &'a JsonObject,
    /// Read by the page to build the `getElevation` accessor
    pub elevation_property: String,
    pub get_fill_color: Rgb,
    pub get_line_color: Rgb,
    pub auto_highlight: bool,
    pub elevation_scale: f64,
    pub pickable: bool,
    pub elevation_range: [f64; 2],
    pub stroked: bool,
    pub filled: bool,
    pub wireframe: bool,
    pub extruded: bool,
    pub coverage: f64,
}

impl<'a> LayerConfig<'a> {
    /// Build the layer for `data` styled by `options`
    pub fn new(data: &'a JsonObject, options: &MapOptions, elevation_range: [f64; 2]) -> Self {
        LayerConfig {
            layer_type: options.layer_type,
            id: "geodeck-layer".to_string(),
            data,
            elevation_property: options.elevation_property.clone(),
            get_fill_color: options.fill_color,
            get_line_color: options.line_color,
            auto_highlight: options.auto_highlight,
            elevation_scale: options.elevation_scale,
            pickable: options.pickable,
            elevation_range,
            stroked: options.stroked,
            filled: options.filled,
            wireframe: options.wireframe,
            extruded: options.extruded,
            coverage: options.coverage,
        }
    }
}
