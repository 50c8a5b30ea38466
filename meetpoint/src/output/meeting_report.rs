use meetpoint_core::{
    model::{
        ConstraintSpec, Coordinate, DegradationReason, SearchResult, SearchStatus, TravelProfile,
    },
    service::Origin,
};
use serde::{Deserialize, Serialize};

/// one row of the per-origin table. durations and distances are absent for
/// origins not represented in a degraded result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OriginReport {
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub duration_minutes: Option<f64>,
    pub distance_km: Option<f64>,
}

/// everything needed to present the outcome of a search.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MeetingReport {
    pub status: SearchStatus,
    pub degradation: Option<DegradationReason>,
    pub profile: TravelProfile,
    pub constraint: ConstraintSpec,
    pub meeting_point: Option<Coordinate>,
    pub max_duration_minutes: Option<f64>,
    pub max_distance_km: Option<f64>,
    pub represented_origins: usize,
    pub requested_origins: usize,
    pub origins: Vec<OriginReport>,
    pub unresolved_addresses: Vec<String>,
}

impl MeetingReport {
    pub fn new(
        origins: &[Origin],
        result: &SearchResult,
        profile: TravelProfile,
        constraint: &ConstraintSpec,
        unresolved_addresses: Vec<String>,
    ) -> MeetingReport {
        let candidate = result.candidate();
        let degradation = match result {
            SearchResult::Complete(_) => None,
            SearchResult::Degraded { reason, .. } => Some(*reason),
            SearchResult::NotFound { reason } => *reason,
        };
        let rows = origins
            .iter()
            .enumerate()
            .map(|(idx, origin)| OriginReport {
                address: origin.address.clone(),
                lat: origin.coordinate.lat,
                lon: origin.coordinate.lon,
                duration_minutes: candidate.and_then(|c| c.per_origin_durations.get(idx).copied()),
                distance_km: candidate.and_then(|c| c.per_origin_distances.get(idx).copied()),
            })
            .collect();
        MeetingReport {
            status: result.status(),
            degradation,
            profile,
            constraint: *constraint,
            meeting_point: candidate.map(|c| c.point),
            max_duration_minutes: candidate.and_then(|c| c.max_duration_minutes()),
            max_distance_km: candidate.and_then(|c| c.max_distance_km()),
            represented_origins: candidate.map(|c| c.represented_origins()).unwrap_or_default(),
            requested_origins: origins.len(),
            origins: rows,
            unresolved_addresses,
        }
    }

    /// human readable summary of the search outcome.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![];
        let Some(point) = self.meeting_point else {
            lines.push(format!(
                "no meeting point satisfies {}, try increasing the maximum",
                self.constraint
            ));
            if let Some(reason) = self.degradation {
                lines.push(format!("search stopped early: {reason}"));
            }
            return lines;
        };
        if self.status == SearchStatus::Degraded {
            let reason = self
                .degradation
                .map(|r| r.to_string())
                .unwrap_or_default();
            lines.push(format!("best effort result, search stopped early: {reason}"));
        }
        if self.represented_origins != self.requested_origins {
            lines.push(format!(
                "warning: only {}/{} addresses were included in the calculation",
                self.represented_origins, self.requested_origins
            ));
        }
        lines.push(format!("meeting point: {point}"));
        if let Some(duration) = self.max_duration_minutes {
            lines.push(format!("maximum travel time: {duration:.1} min"));
        }
        if let Some(distance) = self.max_distance_km {
            lines.push(format!("maximum travel distance: {distance:.1} km"));
        }
        for row in self.origins.iter() {
            let line = match (row.duration_minutes, row.distance_km) {
                (Some(t), Some(d)) => format!("  {}: {t:.1} min, {d:.1} km", row.address),
                _ => format!("  {}: N/A", row.address),
            };
            lines.push(line);
        }
        lines
    }
}
