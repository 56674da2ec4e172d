//! Bounding box and centroid aggregation across geometries
//!
//! The aggregate bounding box is the true union of every geometry's
//! bounds. The aggregate centroid is the unweighted arithmetic mean of the
//! individual centroids: a large polygon and a single point pull the
//! result equally. This is a geometric approximation, not the centroid of
//! the unioned shape, and existing maps depend on it staying that way.

use geo::{BoundingRect, Centroid as _, Geometry};
use log::debug;

use super::bbox::BoundingBox;
use super::point::Centroid;
use crate::errors::{GeoDeckError, GeoDeckResult};

/// Accumulates bounds and centroids one geometry at a time
#[derive(Debug, Default)]
pub struct GeometryAggregator {
    bounds: Option<BoundingBox>,
    sum_x: f64,
    sum_y: f64,
    count: usize,
}

impl GeometryAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        GeometryAggregator::default()
    }

    /// Add a geometry to the aggregate
    ///
    /// # Returns
    /// An `InputFormatError` if the geometry is empty (no bounds or no
    /// centroid), in which case the aggregator is left unchanged
    pub fn add(&mut self, geometry: &Geometry<f64>) -> GeoDeckResult<()> {
        let (bounds, centroid) = Self::describe(geometry).ok_or_else(|| {
            GeoDeckError::InputFormatError(format!(
                "Geometry #{} is empty and has no bounds or centroid",
                self.count
            ))
        })?;
        let bounds = BoundingBox::try_from(bounds)?;
        let centroid = Centroid::from(centroid);

        self.bounds = Some(match self.bounds {
            Some(current) => current.union(&bounds),
            None => bounds,
        });
        self.sum_x += centroid.x;
        self.sum_y += centroid.y;
        self.count += 1;
        Ok(())
    }

    /// Produce the union bounding box and mean centroid
    ///
    /// # Returns
    /// `EmptyInputError` when nothing was added
    pub fn finish(&self) -> GeoDeckResult<(BoundingBox, Centroid)> {
        let bounds = self.bounds.ok_or(GeoDeckError::EmptyInputError)?;
        let n = self.count as f64;
        let centroid = Centroid::new(self.sum_x / n, self.sum_y / n);
        debug!("Aggregated {} geometries: bounds={:?} centroid={:?}", self.count, bounds, centroid);
        Ok((bounds, centroid))
    }

    fn describe(geometry: &Geometry<f64>) -> Option<(geo::Rect<f64>, geo::Point<f64>)> {
        Some((geometry.bounding_rect()?, geometry.centroid()?))
    }
}

/// Compute the union bounding box and mean centroid of `geometries`
///
/// Fails with `EmptyInputError` for an empty sequence and with
/// `InputFormatError` if any geometry is empty.
pub fn aggregate<'a, I>(geometries: I) -> GeoDeckResult<(BoundingBox, Centroid)>
where
    I: IntoIterator<Item = &'a Geometry<f64>>,
{
    let mut aggregator = GeometryAggregator::new();
    for geometry in geometries {
        aggregator.add(geometry)?;
    }
    aggregator.finish()
}
