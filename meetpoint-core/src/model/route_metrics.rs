use serde::{Deserialize, Serialize};

/// duration and distance of a single routed trip.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RouteMetrics {
    pub duration_minutes: f64,
    pub distance_km: f64,
}

impl RouteMetrics {
    /// builds metrics from the units reported by routing services. returns None
    /// when either value is negative or not finite.
    pub fn from_seconds_and_meters(seconds: f64, meters: f64) -> Option<RouteMetrics> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(seconds) && valid(meters) {
            Some(RouteMetrics {
                duration_minutes: seconds / 60.0,
                distance_km: meters / 1000.0,
            })
        } else {
            None
        }
    }
}
