use crate::model::{Coordinate, TravelProfile};

/// raw routing service response body. interpreted by
/// [`crate::algorithm::route_info`].
pub type RouteResponse = serde_json::Value;

/// closed classification of routing failures. only `RateLimited` changes the
/// course of a search; all other kinds reject the candidate being evaluated.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RoutingFailure {
    #[error("routing service quota exceeded")]
    RateLimited,
    #[error("no route found between origin and destination")]
    NotFound,
    #[error("routing service responded with status {status}: {message}")]
    ServiceError { status: u16, message: String },
    #[error("failure connecting to routing service: {0}")]
    ConnectionError(String),
}

impl RoutingFailure {
    /// classifies an unsuccessful HTTP status code.
    pub fn from_status(status: u16, message: String) -> RoutingFailure {
        match status {
            429 => RoutingFailure::RateLimited,
            404 => RoutingFailure::NotFound,
            _ => RoutingFailure::ServiceError { status, message },
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, RoutingFailure::RateLimited)
    }
}

/// a service that routes between two points for a travel profile.
///
/// calls are blocking. implementations must bound each call with a timeout so
/// that an unresponsive service cannot stall a search.
pub trait RoutingClient {
    fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        profile: TravelProfile,
    ) -> Result<RouteResponse, RoutingFailure>;
}
