use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GridMode {
    /// bounding box of the origins, padded outward on each axis
    Local,
    /// square region recentered on the origin centroid and shrunk
    WideSpread,
}

impl std::fmt::Display for GridMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridMode::Local => write!(f, "local"),
            GridMode::WideSpread => write!(f, "wide-spread"),
        }
    }
}

/// the rectangle, in degrees, that the candidate lattice covers.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SearchRegion {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub mode: GridMode,
}

impl SearchRegion {
    /// true if the coordinate lies in the region grown by `tolerance` degrees.
    pub fn contains(&self, coordinate: &Coordinate, tolerance: f64) -> bool {
        (self.lat_min - tolerance..=self.lat_max + tolerance).contains(&coordinate.lat)
            && (self.lon_min - tolerance..=self.lon_max + tolerance).contains(&coordinate.lon)
    }
}
