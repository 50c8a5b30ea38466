use crate::{
    algorithm::route_info,
    model::{CandidateResult, ConstraintSpec, Coordinate, RouteMetrics, TravelProfile},
    service::{RoutingClient, RoutingFailure},
};

/// outcome of routing every origin to one candidate meeting point.
#[derive(Clone, Debug, PartialEq)]
pub enum CandidateEvaluation {
    /// every origin reached the candidate within the constraint
    Accepted(CandidateResult),
    Rejected(Rejection),
    /// the routing service reported a rate limit. `completed` is the number of
    /// origins that had been routed (and satisfied the constraint) before it.
    RateLimited { completed: usize },
}

/// why a candidate was dropped. rejections never stop a search.
#[derive(Clone, Debug, PartialEq)]
pub enum Rejection {
    Unextractable {
        origin_index: usize,
    },
    ConstraintViolated {
        origin_index: usize,
        value: f64,
    },
    RoutingFailed {
        origin_index: usize,
        failure: RoutingFailure,
    },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Unextractable { origin_index } => {
                write!(f, "origin {origin_index}: unusable routing response")
            }
            Rejection::ConstraintViolated {
                origin_index,
                value,
            } => write!(f, "origin {origin_index}: {value:.2} exceeds constraint"),
            Rejection::RoutingFailed {
                origin_index,
                failure,
            } => write!(f, "origin {origin_index}: {failure}"),
        }
    }
}

/// routes each origin, in order, to the candidate.
///
/// evaluation stops at the first origin whose response is unusable or whose
/// trip violates the constraint, so an infeasible candidate costs as few
/// routing calls as possible. a rate limit is reported rather than treated as
/// a rejection. the score of an accepted candidate is its worst leg.
///
/// # Arguments
/// * `routing` - routing service
/// * `candidate` - lattice point being evaluated
/// * `origins` - origin coordinates, in search order
/// * `profile` - travel mode for every routing call
/// * `constraint` - cap applied to every origin's trip
pub fn evaluate_candidate(
    routing: &dyn RoutingClient,
    candidate: &Coordinate,
    origins: &[Coordinate],
    profile: TravelProfile,
    constraint: &ConstraintSpec,
) -> CandidateEvaluation {
    let mut trips: Vec<RouteMetrics> = Vec::with_capacity(origins.len());
    for (origin_index, origin) in origins.iter().enumerate() {
        let response = match routing.route(origin, candidate, profile) {
            Ok(response) => response,
            Err(RoutingFailure::RateLimited) => {
                return CandidateEvaluation::RateLimited {
                    completed: trips.len(),
                }
            }
            Err(failure) => {
                return CandidateEvaluation::Rejected(Rejection::RoutingFailed {
                    origin_index,
                    failure,
                })
            }
        };
        let Some(metrics) = route_info::extract_route_info(&response) else {
            return CandidateEvaluation::Rejected(Rejection::Unextractable { origin_index });
        };
        if !constraint.is_satisfied_by(&metrics) {
            return CandidateEvaluation::Rejected(Rejection::ConstraintViolated {
                origin_index,
                value: constraint.measure(&metrics),
            });
        }
        trips.push(metrics);
    }

    match CandidateResult::from_metrics(*candidate, &trips, constraint.kind()) {
        Some(result) => CandidateEvaluation::Accepted(result),
        // no origins to route from; nothing to score
        None => CandidateEvaluation::Rejected(Rejection::Unextractable { origin_index: 0 }),
    }
}
