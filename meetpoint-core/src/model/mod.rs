mod candidate_result;
mod constraint;
mod coordinate;
mod error;
mod route_metrics;
mod search_result;
mod travel_profile;

pub use candidate_result::CandidateResult;
pub use constraint::{ConstraintKind, ConstraintSpec};
pub use coordinate::Coordinate;
pub use error::MeetPointError;
pub use route_metrics::RouteMetrics;
pub use search_result::{DegradationReason, SearchResult, SearchStatus};
pub use travel_profile::TravelProfile;

/// the fewest origins a meeting point search can be run over.
pub const MIN_ORIGINS: usize = 2;
