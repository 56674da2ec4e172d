//! Point structure for representing a collection centroid

/// A 2D point, longitude/latitude for GeoJSON input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// X coordinate (longitude)
    pub x: f64,
    /// Y coordinate (latitude)
    pub y: f64,
}

impl Centroid {
    /// Create a new centroid
    pub fn new(x: f64, y: f64) -> Self {
        Centroid { x, y }
    }

    /// Longitude of the point
    pub fn longitude(&self) -> f64 {
        self.x
    }

    /// Latitude of the point
    pub fn latitude(&self) -> f64 {
        self.y
    }
}

impl From<geo::Point<f64>> for Centroid {
    fn from(point: geo::Point<f64>) -> Self {
        Centroid::new(point.x(), point.y())
    }
}
