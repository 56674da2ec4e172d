//! Tests for bounding box and centroid aggregation

use geo::{line_string, point, polygon, Geometry, GeometryCollection};

use crate::errors::GeoDeckError;
use crate::geometry::{aggregate, BoundingBox, Centroid, GeometryAggregator};

fn pt(x: f64, y: f64) -> Geometry<f64> {
    Geometry::Point(point!(x: x, y: y))
}

fn square(min_x: f64, min_y: f64, size: f64) -> Geometry<f64> {
    Geometry::Polygon(polygon![
        (x: min_x, y: min_y),
        (x: min_x + size, y: min_y),
        (x: min_x + size, y: min_y + size),
        (x: min_x, y: min_y + size),
        (x: min_x, y: min_y),
    ])
}

#[test]
fn test_identical_points_collapse() {
    let geometries = vec![pt(4.5, -2.0), pt(4.5, -2.0), pt(4.5, -2.0)];
    let (bounds, centroid) = aggregate(&geometries).unwrap();

    assert_eq!(bounds.min_x, bounds.max_x);
    assert_eq!(bounds.min_y, bounds.max_y);
    assert_eq!(centroid, Centroid::new(4.5, -2.0));
    assert!(bounds.is_point());
}

#[test]
fn test_union_bounds_independent_of_order() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(5.0, -3.0, 1.0);

    let (forward, _) = aggregate([&a, &b]).unwrap();
    let (backward, _) = aggregate([&b, &a]).unwrap();

    assert_eq!(forward, BoundingBox::new(0.0, -3.0, 6.0, 2.0).unwrap());
    assert_eq!(forward, backward);
}

#[test]
fn test_centroid_is_unweighted_mean() {
    let geometries = vec![pt(1.0, 1.0), pt(3.0, 3.0), pt(5.0, 5.0)];
    let (_, centroid) = aggregate(&geometries).unwrap();

    assert!((centroid.x - 3.0).abs() < 1e-12);
    assert!((centroid.y - 3.0).abs() < 1e-12);
}

#[test]
fn test_centroid_ignores_area() {
    // A 10x10 square centred on (5,5) and a point at (15,5): an area
    // weighted centroid would sit at (5,5), the mean sits halfway.
    let geometries = vec![square(0.0, 0.0, 10.0), pt(15.0, 5.0)];
    let (bounds, centroid) = aggregate(&geometries).unwrap();

    assert!((centroid.x - 10.0).abs() < 1e-9);
    assert!((centroid.y - 5.0).abs() < 1e-9);
    assert_eq!(bounds.as_tuple(), (0.0, 0.0, 15.0, 10.0));
}

#[test]
fn test_line_geometry() {
    let line = Geometry::LineString(line_string![(x: -1.0, y: 0.0), (x: 1.0, y: 4.0)]);
    let (bounds, centroid) = aggregate([&line]).unwrap();

    assert_eq!(bounds.as_tuple(), (-1.0, 0.0, 1.0, 4.0));
    assert!((centroid.x - 0.0).abs() < 1e-12);
    assert!((centroid.y - 2.0).abs() < 1e-12);
}

#[test]
fn test_empty_input_fails() {
    let geometries: Vec<Geometry<f64>> = Vec::new();
    assert!(matches!(aggregate(&geometries), Err(GeoDeckError::EmptyInputError)));
    assert!(matches!(GeometryAggregator::new().finish(), Err(GeoDeckError::EmptyInputError)));
}

#[test]
fn test_empty_geometry_rejected() {
    let empty = Geometry::GeometryCollection(GeometryCollection::<f64>::new_from(vec![]));
    let mut aggregator = GeometryAggregator::new();
    aggregator.add(&pt(1.0, 1.0)).unwrap();

    let result = aggregator.add(&empty);
    assert!(matches!(result, Err(GeoDeckError::InputFormatError(_))));
    let (bounds, centroid) = aggregator.finish().unwrap();
    assert!(bounds.is_point());
    assert_eq!(centroid, Centroid::new(1.0, 1.0));
}

#[test]
fn test_bounding_box_rejects_inverted_corners() {
    assert!(BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_err());
    assert!(BoundingBox::new(0.0, 0.0, f64::NAN, 1.0).is_err());
}

#[test]
fn test_bounding_box_union_and_extent() {
    let a = BoundingBox::new(-10.0, -5.0, 0.0, 5.0).unwrap();
    let b = BoundingBox::new(0.0, -1.0, 10.0, 1.0).unwrap();
    let both = a.union(&b);
    assert_eq!(both.width(), 20.0);
    assert_eq!(both.height(), 10.0);
    assert!(!both.is_point());
}
