use serde::{Deserialize, Serialize};

use super::{ConstraintKind, Coordinate, RouteMetrics};

/// a scored candidate meeting point. the per-origin vectors are aligned with
/// the origin order of the search and share the same length, which may be
/// less than the origin count for a partial result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CandidateResult {
    pub point: Coordinate,
    /// worst-case leg: the largest duration (minutes) or distance (km) over all origins
    pub score: f64,
    pub per_origin_durations: Vec<f64>,
    pub per_origin_distances: Vec<f64>,
}

impl CandidateResult {
    /// scores a candidate from the trips of each origin. the score is the
    /// maximum leg for the constrained quantity, or None if there are no trips.
    pub fn from_metrics(
        point: Coordinate,
        metrics: &[RouteMetrics],
        kind: ConstraintKind,
    ) -> Option<CandidateResult> {
        let per_origin_durations: Vec<f64> =
            metrics.iter().map(|m| m.duration_minutes).collect();
        let per_origin_distances: Vec<f64> = metrics.iter().map(|m| m.distance_km).collect();
        let score = match kind {
            ConstraintKind::Time => max_value(&per_origin_durations),
            ConstraintKind::Distance => max_value(&per_origin_distances),
        }?;
        Some(CandidateResult {
            point,
            score,
            per_origin_durations,
            per_origin_distances,
        })
    }

    /// number of origins with a routing measurement in this result.
    pub fn represented_origins(&self) -> usize {
        self.per_origin_durations.len()
    }

    pub fn is_complete(&self, origin_count: usize) -> bool {
        self.represented_origins() == origin_count
    }

    pub fn max_duration_minutes(&self) -> Option<f64> {
        max_value(&self.per_origin_durations)
    }

    pub fn max_distance_km(&self) -> Option<f64> {
        max_value(&self.per_origin_distances)
    }
}

fn max_value(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod test {
    use super::*;

    fn metrics(duration_minutes: f64, distance_km: f64) -> RouteMetrics {
        RouteMetrics {
            duration_minutes,
            distance_km,
        }
    }

    #[test]
    fn test_score_is_worst_leg() {
        let trips = vec![metrics(10.0, 30.0), metrics(25.0, 12.0), metrics(5.0, 2.0)];
        let point = Coordinate::new(1.0, 2.0);
        let by_time = CandidateResult::from_metrics(point, &trips, ConstraintKind::Time)
            .expect("test invariant failed: trips provided");
        let by_distance = CandidateResult::from_metrics(point, &trips, ConstraintKind::Distance)
            .expect("test invariant failed: trips provided");
        assert_eq!(by_time.score, 25.0);
        assert_eq!(by_distance.score, 30.0);
        assert_eq!(by_time.per_origin_durations, vec![10.0, 25.0, 5.0]);
        assert!(by_time.is_complete(3));
        assert!(!by_time.is_complete(4));
    }

    #[test]
    fn test_no_trips_has_no_score() {
        let point = Coordinate::new(1.0, 2.0);
        assert!(CandidateResult::from_metrics(point, &[], ConstraintKind::Time).is_none());
    }
}
