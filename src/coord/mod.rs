use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide a longitude/latitude pair in decimal degrees.
///
/// Implemented for `(f64, f64)` tuples ordered `(lng, lat)`, `geo_types::Point<f64>`
/// and [`LatLng`]. This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// A latitude/longitude pair in decimal degrees (JGD2011 / WGS84).
///
/// Field order follows the way mesh documents quote positions, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Coordinate for LatLng {
    fn x(&self) -> f64 {
        self.lng
    }
    fn y(&self) -> f64 {
        self.lat
    }
}

impl From<LatLng> for Point<f64> {
    fn from(c: LatLng) -> Self {
        Point::new(c.lng, c.lat)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(p: Point<f64>) -> Self {
        LatLng::new(p.y(), p.x())
    }
}
