//! Bounding box structure for enclosing geometries

use crate::errors::{GeoDeckError, GeoDeckResult};

/// An axis-aligned bounding box
///
/// Always satisfies `min_x <= max_x` and `min_y <= max_y`; the
/// constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    ///
    /// # Returns
    /// The bounding box, or an `InputFormatError` when a coordinate is not
    /// finite or a minimum exceeds its maximum
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> GeoDeckResult<Self> {
        if ![min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite()) {
            return Err(GeoDeckError::InputFormatError(format!(
                "Bounding box has non-finite coordinates: ({}, {}, {}, {})",
                min_x, min_y, max_x, max_y
            )));
        }
        if min_x > max_x || min_y > max_y {
            return Err(GeoDeckError::InputFormatError(format!(
                "Bounding box minimum exceeds maximum: ({}, {}, {}, {})",
                min_x, min_y, max_x, max_y
            )));
        }

        Ok(BoundingBox { min_x, min_y, max_x, max_y })
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Smallest bounding box enclosing both `self` and `other`
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Whether the box collapses to a single location
    pub fn is_point(&self) -> bool {
        self.width() == 0.0 && self.height() == 0.0
    }

    /// Bounds as the `(minx, miny, maxx, maxy)` tuple used by GeoJSON tooling
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl TryFrom<geo::Rect<f64>> for BoundingBox {
    type Error = GeoDeckError;

    fn try_from(rect: geo::Rect<f64>) -> GeoDeckResult<Self> {
        // geo::Rect normalizes its corners, so min <= max already holds
        BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }
}
