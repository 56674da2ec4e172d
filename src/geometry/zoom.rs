//! Zoom level estimation for a bounding box on a pixel surface
//!
//! For each axis the angular span per pixel is scaled by `360 / 2π / ln 2`
//! and negated; the smaller of the two axis values wins. Every
//! non-degenerate box therefore produces a zoom `<= 0`, which is the
//! opposite of the usual tile-zoom convention. The sign is kept as is:
//! renderers clamp the value to their minimum zoom, and maps generated
//! so far rely on that behavior.

use std::f64::consts::{LN_2, PI};

use super::bbox::BoundingBox;
use crate::errors::{GeoDeckError, GeoDeckResult};

/// Zoom level scalar handed to the view state
pub type ZoomLevel = f64;

/// Fits bounding boxes to a fixed rendering surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomEstimator {
    width: f64,
    height: f64,
}

impl ZoomEstimator {
    /// Create an estimator for a surface of `width` x `height` pixels
    ///
    /// # Returns
    /// `DegenerateBoundsError` if either dimension is not a positive,
    /// finite number
    pub fn new(width: f64, height: f64) -> GeoDeckResult<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(GeoDeckError::DegenerateBoundsError(format!(
                "Surface size must be positive, got {}x{} pixels",
                width, height
            )));
        }
        Ok(ZoomEstimator { width, height })
    }

    /// Estimate the zoom level for `bounds`
    ///
    /// A box with zero extent on both axes has nothing to fit and is
    /// rejected with `DegenerateBoundsError`. A box collapsed on only one
    /// axis is fitted on the other.
    pub fn estimate(&self, bounds: &BoundingBox) -> GeoDeckResult<ZoomLevel> {
        if bounds.is_point() {
            return Err(GeoDeckError::DegenerateBoundsError(format!(
                "Bounding box ({}, {}, {}, {}) has zero width and height",
                bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
            )));
        }

        let xzoom = Self::axis_zoom(bounds.width(), self.width);
        let yzoom = Self::axis_zoom(bounds.height(), self.height);
        Ok(xzoom.min(yzoom))
    }

    fn axis_zoom(span: f64, pixels: f64) -> f64 {
        -(span / pixels) / (2.0 * PI) * 360.0 / LN_2
    }
}

/// Estimate the zoom level for `bounds` on a `width` x `height` pixel surface
pub fn estimate_zoom(bounds: &BoundingBox, width: f64, height: f64) -> GeoDeckResult<ZoomLevel> {
    ZoomEstimator::new(width, height)?.estimate(bounds)
}
