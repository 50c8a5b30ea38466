use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{MeetPointError, RouteMetrics};

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// maximum travel time, in minutes
    Time,
    /// maximum travel distance, in kilometers
    Distance,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintKind::Time => write!(f, "time"),
            ConstraintKind::Distance => write!(f, "distance"),
        }
    }
}

/// cap on the travel time or distance from every origin to an accepted
/// meeting point. the maximum is always positive.
#[derive(Debug, Serialize, Copy, Clone, PartialEq)]
pub struct ConstraintSpec {
    kind: ConstraintKind,
    max_value: f64,
}

impl ConstraintSpec {
    pub fn new(kind: ConstraintKind, max_value: f64) -> Result<ConstraintSpec, MeetPointError> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(MeetPointError::InvalidConstraint(max_value));
        }
        Ok(ConstraintSpec { kind, max_value })
    }

    pub fn time(max_minutes: f64) -> Result<ConstraintSpec, MeetPointError> {
        Self::new(ConstraintKind::Time, max_minutes)
    }

    pub fn distance(max_km: f64) -> Result<ConstraintSpec, MeetPointError> {
        Self::new(ConstraintKind::Distance, max_km)
    }

    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// the value of a trip that this constraint limits (minutes or kilometers).
    pub fn measure(&self, metrics: &RouteMetrics) -> f64 {
        match self.kind {
            ConstraintKind::Time => metrics.duration_minutes,
            ConstraintKind::Distance => metrics.distance_km,
        }
    }

    pub fn is_satisfied_by(&self, metrics: &RouteMetrics) -> bool {
        self.measure(metrics) <= self.max_value
    }
}

impl std::fmt::Display for ConstraintSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ConstraintKind::Time => write!(f, "time <= {} min", self.max_value),
            ConstraintKind::Distance => write!(f, "distance <= {} km", self.max_value),
        }
    }
}
