//! Planar geometry: 2-D points and rounded Euclidean distances.

/// A point on the simulation plane. Coordinates are kilometres on an
/// abstract grid, not geographic degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Round to two decimal places, the precision used for both distances
/// and fares.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Euclidean distance between two points in kilometres, rounded to two
/// decimal places. Symmetric: `distance_km(a, b) == distance_km(b, a)`.
pub fn distance_km(a: Point, b: Point) -> f64 {
    round2(((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt())
}
