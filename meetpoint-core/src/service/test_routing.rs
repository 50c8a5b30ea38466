use std::cell::Cell;

use serde_json::json;

use crate::model::{Coordinate, TravelProfile};
use crate::service::{RouteResponse, RoutingClient, RoutingFailure};

/// deterministic routing service for tests. durations and distances grow
/// linearly with the straight-line degree distance between the endpoints.
pub struct StubRoutingClient {
    pub minutes_per_degree: f64,
    pub km_per_degree: f64,
    /// 1-based index of the call that reports a rate limit. later calls also fail.
    pub rate_limit_on_call: Option<usize>,
    calls: Cell<usize>,
}

impl StubRoutingClient {
    pub fn new(minutes_per_degree: f64, km_per_degree: f64) -> StubRoutingClient {
        StubRoutingClient {
            minutes_per_degree,
            km_per_degree,
            rate_limit_on_call: None,
            calls: Cell::new(0),
        }
    }

    pub fn rate_limited_on(mut self, call: usize) -> StubRoutingClient {
        self.rate_limit_on_call = Some(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RoutingClient for StubRoutingClient {
    fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        _profile: TravelProfile,
    ) -> Result<RouteResponse, RoutingFailure> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if matches!(self.rate_limit_on_call, Some(limit) if call >= limit) {
            return Err(RoutingFailure::RateLimited);
        }
        let degrees = origin.degree_distance(destination);
        Ok(geojson_route(
            degrees * self.minutes_per_degree * 60.0,
            degrees * self.km_per_degree * 1000.0,
        ))
    }
}

/// a feature collection response in the shape returned by the directions API.
pub fn geojson_route(duration_seconds: f64, distance_meters: f64) -> RouteResponse {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "summary": { "duration": duration_seconds, "distance": distance_meters }
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[2.3522, 48.8566], [4.8357, 45.764]]
            }
        }]
    })
}
