//! GeoJSON input handling
//!
//! Loading FeatureCollections from disk and extracting the parts the map
//! and property tools work on.

pub mod reader;
pub mod properties;
#[cfg(test)]
mod tests;

pub use reader::FeatureReader;
pub use properties::{list_properties, PropertyInspector};
