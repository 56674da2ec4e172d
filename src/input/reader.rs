//! GeoJSON FeatureCollection reader
//!
//! The document is kept as plain JSON. Features only need a `geometry`
//! for the map and a `properties` object for the inspector, so neither
//! path depends on the other being parseable, and features without their
//! own `"type": "Feature"` tag are accepted.

use std::fs::File;
use std::io::{BufReader, Read};

use geojson::{JsonObject, JsonValue};
use log::{debug, info};

use crate::errors::{GeoDeckError, GeoDeckResult};

const FEATURE_COLLECTION: &str = "FeatureCollection";

/// Reads a GeoJSON FeatureCollection and exposes its features
#[derive(Debug, Clone)]
pub struct FeatureReader {
    source: String,
    collection: JsonObject,
}

impl FeatureReader {
    /// Load a FeatureCollection from a file
    ///
    /// # Arguments
    /// * `path` - Path to the GeoJSON file
    ///
    /// # Returns
    /// The reader, `InputFileError` if the file cannot be opened, or
    /// `InputFormatError` if it is not JSON with a `features` array
    pub fn load(path: &str) -> GeoDeckResult<Self> {
        info!("Reading GeoJSON from {}", path);
        let file = File::open(path).map_err(|e| GeoDeckError::input_file(path, e))?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parse a FeatureCollection from any reader
    ///
    /// `source` names the input in error messages.
    pub fn from_reader<R: Read>(reader: R, source: &str) -> GeoDeckResult<Self> {
        let value: JsonValue = serde_json::from_reader(reader)
            .map_err(|e| GeoDeckError::InputFormatError(format!("{}: {}", source, e)))?;
        Self::from_value(value, source)
    }

    /// Parse a FeatureCollection from a string
    pub fn from_str(content: &str, source: &str) -> GeoDeckResult<Self> {
        let value: JsonValue = serde_json::from_str(content)
            .map_err(|e| GeoDeckError::InputFormatError(format!("{}: {}", source, e)))?;
        Self::from_value(value, source)
    }

    fn from_value(value: JsonValue, source: &str) -> GeoDeckResult<Self> {
        let format_error = |msg: String| GeoDeckError::InputFormatError(format!("{}: {}", source, msg));

        let mut collection = match value {
            JsonValue::Object(object) => object,
            _ => return Err(format_error("expected a JSON object at the top level".to_string())),
        };

        match collection.get("type") {
            None => {}
            Some(JsonValue::String(kind)) if kind == FEATURE_COLLECTION => {}
            Some(JsonValue::String(kind)) => {
                return Err(format_error(format!("expected a FeatureCollection, found a {}", kind)))
            }
            Some(_) => return Err(format_error("the \"type\" member is not a string".to_string())),
        }

        let features = match collection.get_mut("features") {
            Some(JsonValue::Array(features)) => features,
            Some(_) => return Err(format_error("\"features\" is not an array".to_string())),
            None => return Err(format_error("missing \"features\" member".to_string())),
        };

        // deck.gl reads the collection as GeoJSON, so untagged features get their tag here
        for (index, feature) in features.iter_mut().enumerate() {
            match feature {
                JsonValue::Object(object) => {
                    object
                        .entry("type")
                        .or_insert_with(|| JsonValue::String("Feature".to_string()));
                }
                _ => return Err(format_error(format!("feature #{} is not an object", index))),
            }
        }

        collection
            .entry("type")
            .or_insert_with(|| JsonValue::String(FEATURE_COLLECTION.to_string()));

        let reader = FeatureReader { source: source.to_string(), collection };
        debug!("Loaded {} features from {}", reader.features().len(), source);
        Ok(reader)
    }

    /// Name of the input this reader was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The collection as handed to the renderer
    pub fn collection(&self) -> &JsonObject {
        &self.collection
    }

    /// Features in file order
    pub fn features(&self) -> &[JsonValue] {
        match self.collection.get("features") {
            Some(JsonValue::Array(features)) => features,
            _ => &[],
        }
    }

    /// Convert every feature geometry to a `geo` geometry
    ///
    /// # Returns
    /// One geometry per feature, or `InputFormatError` if a feature has
    /// no geometry or one that cannot be converted
    pub fn geometries(&self) -> GeoDeckResult<Vec<geo::Geometry<f64>>> {
        self.features()
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                let unusable = |e: &dyn std::fmt::Display| {
                    GeoDeckError::InputFormatError(format!(
                        "{}: feature #{} has an unusable geometry: {}", self.source, index, e
                    ))
                };

                let value = match feature.get("geometry") {
                    None | Some(JsonValue::Null) => {
                        return Err(GeoDeckError::InputFormatError(format!(
                            "{}: feature #{} has no geometry", self.source, index
                        )))
                    }
                    Some(value) => value.clone(),
                };
                let geometry = geojson::Geometry::from_json_value(value).map_err(|e| unusable(&e))?;
                geo::Geometry::<f64>::try_from(geometry).map_err(|e| unusable(&e))
            })
            .collect()
    }

    /// Property objects of every feature
    ///
    /// Geometries are not looked at.
    ///
    /// # Returns
    /// One property object per feature, or `InputFormatError` if a
    /// feature's `properties` member is absent, null or not an object
    pub fn properties(&self) -> GeoDeckResult<Vec<&JsonObject>> {
        self.features()
            .iter()
            .enumerate()
            .map(|(index, feature)| match feature.get("properties") {
                Some(JsonValue::Object(properties)) => Ok(properties),
                None | Some(JsonValue::Null) => Err(GeoDeckError::InputFormatError(format!(
                    "{}: feature #{} has no properties", self.source, index
                ))),
                Some(_) => Err(GeoDeckError::InputFormatError(format!(
                    "{}: feature #{} has properties that are not an object", self.source, index
                ))),
            })
            .collect()
    }
}
