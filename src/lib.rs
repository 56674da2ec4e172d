pub mod errors;
pub mod geometry;
pub mod input;
pub mod config;
pub mod render;
pub mod utils;
pub mod cli;
pub mod commands;
pub mod api;

pub use crate::api::{GeoDeck, MapSummary, ZoomSource};

pub use errors::{GeoDeckError, GeoDeckResult};
pub use geometry::{aggregate, estimate_zoom, BoundingBox, Centroid, GeometryAggregator, ZoomEstimator, ZoomLevel};
pub use input::{list_properties, FeatureReader, PropertyInspector};
pub use config::MapConfig;
pub use render::{DeckHtmlRenderer, LayerConfig, MapOptions, MapRenderer, ViewState};
