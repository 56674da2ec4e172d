//! Geometry aggregation and view fitting
//!
//! This module provides the value types and pure functions used to
//! derive a map view from a collection of feature geometries.

mod bbox;
mod point;
mod aggregate;
mod zoom;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Centroid;
pub use self::aggregate::{aggregate, GeometryAggregator};
pub use self::zoom::{estimate_zoom, ZoomEstimator, ZoomLevel};
