//! Angle-to-coordinate helpers for placing seal elements on circles.
//!
//! Canvas coordinates: y grows downward, angles are in degrees and increase
//! clockwise from the positive x axis.

/// A 2D point in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Place a point on the circle of the given radius around `center`,
/// at `degrees` from the positive x axis.
pub fn polar(center: Point, radius: f64, degrees: f64) -> Point {
    let rad = degrees.to_radians();
    Point {
        x: center.x + radius * rad.cos(),
        y: center.y + radius * rad.sin(),
    }
}

/// `count` evenly spaced points on a circle, starting at `start_degrees`
/// and stepping by 360/count degrees.
pub fn ring_points(center: Point, radius: f64, count: usize, start_degrees: f64) -> Vec<Point> {
    let step = 360.0 / count as f64;
    (0..count)
        .map(|k| polar(center, radius, start_degrees + k as f64 * step))
        .collect()
}

/// Midpoint of the segment a–b
pub fn midpoint(a: Point, b: Point) -> Point {
    Point {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

/// Angle of the directed segment a→b in degrees (atan2 range, -180..=180)
pub fn segment_angle(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Euclidean distance between two points
pub fn dist(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}
