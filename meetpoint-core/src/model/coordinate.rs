use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use super::MeetPointError;

/// a WGS84 position in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// confirms this coordinate is finite and within the range of valid
    /// latitude and longitude values.
    pub fn validate(&self) -> Result<(), MeetPointError> {
        let message = if !self.lat.is_finite() || !self.lon.is_finite() {
            "latitude and longitude must be finite"
        } else if !(-90.0..=90.0).contains(&self.lat) {
            "latitude must be in range [-90, 90]"
        } else if !(-180.0..=180.0).contains(&self.lon) {
            "longitude must be in range [-180, 180]"
        } else {
            return Ok(());
        };
        Err(MeetPointError::InvalidCoordinate {
            lat: self.lat,
            lon: self.lon,
            message: String::from(message),
        })
    }

    /// the [lon, lat] ordering used by GeoJSON and routing service payloads.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// straight-line distance in degrees, ignoring the curvature of the earth.
    pub fn degree_distance(&self, other: &Coordinate) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate::new(value.y, value.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}
