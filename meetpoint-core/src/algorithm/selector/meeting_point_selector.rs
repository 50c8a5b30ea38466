use std::time::Instant;

use kdam::{Bar, BarExt};

use super::{select_best_complete, select_best_partial, SearchConfig};
use crate::{
    algorithm::{
        candidate_evaluator::{evaluate_candidate, CandidateEvaluation},
        grid::{CandidateGrid, GridBuilder},
    },
    model::{
        CandidateResult, ConstraintSpec, Coordinate, DegradationReason, MeetPointError,
        SearchResult, TravelProfile,
    },
    service::RoutingClient,
};

/// finds the lattice point that minimizes the worst-case trip from a set of
/// origins, subject to a constraint on every trip.
///
/// routing calls are issued one at a time, in row-major lattice order and
/// origin order within each candidate. a rate limit from the routing service
/// (or the optional search timeout) stops the search at once, and the best
/// candidate accepted up to that point is returned as a degraded result.
pub struct MeetingPointSelector<'a> {
    routing: &'a dyn RoutingClient,
    grid_builder: GridBuilder,
    config: SearchConfig,
}

enum SearchState {
    Building,
    Evaluating {
        grid: CandidateGrid,
        next: usize,
        accepted: Vec<CandidateResult>,
    },
    Degraded {
        accepted: Vec<CandidateResult>,
        reason: DegradationReason,
        evaluated: usize,
        total: usize,
    },
    Done(SearchResult),
}

impl<'a> MeetingPointSelector<'a> {
    pub fn new(
        routing: &'a dyn RoutingClient,
        config: SearchConfig,
    ) -> Result<MeetingPointSelector<'a>, MeetPointError> {
        let grid_builder = GridBuilder::new(config.grid.clone())?;
        Ok(MeetingPointSelector {
            routing,
            grid_builder,
            config,
        })
    }

    pub fn grid_builder(&self) -> &GridBuilder {
        &self.grid_builder
    }

    /// runs a meeting point search.
    ///
    /// # Arguments
    /// * `origins` - at least two valid coordinates; per-origin values in the
    ///   result are aligned with this order
    /// * `profile` - travel mode for every routing call
    /// * `constraint` - cap on every origin's trip to an accepted candidate
    ///
    /// # Returns
    /// * the search result, or an error if the origins cannot be searched
    pub fn search(
        &self,
        origins: &[Coordinate],
        profile: TravelProfile,
        constraint: &ConstraintSpec,
    ) -> Result<SearchResult, MeetPointError> {
        let deadline = self
            .config
            .search_timeout()
            .and_then(|timeout| Instant::now().checked_add(timeout));
        let mut bar: Option<Bar> = None;
        let mut state = SearchState::Building;
        loop {
            state = match state {
                SearchState::Building => {
                    let grid = self.grid_builder.build(origins)?;
                    log::info!(
                        "searching {} candidates from {} origins with profile {profile} and {constraint}",
                        grid.len(),
                        origins.len()
                    );
                    bar = self.progress_bar(grid.len());
                    SearchState::Evaluating {
                        grid,
                        next: 0,
                        accepted: vec![],
                    }
                }
                SearchState::Evaluating {
                    grid,
                    next,
                    mut accepted,
                } => {
                    let total = grid.len();
                    let Some(candidate) = grid.get(next).copied() else {
                        log::debug!(
                            "lattice exhausted with {} accepted candidates",
                            accepted.len()
                        );
                        let result = match select_best_complete(&accepted, origins.len()) {
                            Some(best) => SearchResult::Complete(best.clone()),
                            None => SearchResult::NotFound { reason: None },
                        };
                        state = SearchState::Done(result);
                        continue;
                    };
                    if deadline.is_some_and(|d| Instant::now() >= d) {
                        log::warn!("search timeout reached after {next} of {total} candidates");
                        state = SearchState::Degraded {
                            accepted,
                            reason: DegradationReason::TimedOut,
                            evaluated: next,
                            total,
                        };
                        continue;
                    }
                    match evaluate_candidate(self.routing, &candidate, origins, profile, constraint)
                    {
                        CandidateEvaluation::Accepted(result) => {
                            log::debug!("accepted ({candidate}) with score {:.2}", result.score);
                            accepted.push(result);
                        }
                        CandidateEvaluation::Rejected(rejection) => {
                            log::debug!("rejected ({candidate}): {rejection}");
                        }
                        CandidateEvaluation::RateLimited { completed } => {
                            log::warn!(
                                "routing rate limit reached at candidate {} of {total} ({completed} of {} origins routed), returning best result so far",
                                next + 1,
                                origins.len()
                            );
                            state = SearchState::Degraded {
                                accepted,
                                reason: DegradationReason::RateLimited,
                                evaluated: next,
                                total,
                            };
                            continue;
                        }
                    }
                    if let Some(bar) = bar.as_mut() {
                        let _ = bar.update(1);
                    }
                    SearchState::Evaluating {
                        grid,
                        next: next + 1,
                        accepted,
                    }
                }
                SearchState::Degraded {
                    accepted,
                    reason,
                    evaluated,
                    total,
                } => {
                    let result = match select_best_partial(&accepted) {
                        Some(best) => SearchResult::Degraded {
                            best: best.clone(),
                            reason,
                            evaluated,
                            total,
                        },
                        None => SearchResult::NotFound {
                            reason: Some(reason),
                        },
                    };
                    SearchState::Done(result)
                }
                SearchState::Done(result) => {
                    if bar.is_some() {
                        eprintln!();
                    }
                    log::info!("search finished with status {}", result.status());
                    return Ok(result);
                }
            };
        }
    }

    fn progress_bar(&self, total: usize) -> Option<Bar> {
        if !self.config.show_progress {
            return None;
        }
        Bar::builder()
            .desc("evaluating candidates")
            .total(total)
            .build()
            .map_err(|e| log::warn!("failure building progress bar: {e}"))
            .ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{algorithm::grid::GridConfig, service::test_routing::StubRoutingClient};

    const MINUTES_PER_DEGREE: f64 = 60.0;
    const KM_PER_DEGREE: f64 = 100.0;

    fn config() -> SearchConfig {
        SearchConfig {
            show_progress: false,
            ..Default::default()
        }
    }

    fn paris_lyon() -> Vec<Coordinate> {
        vec![
            Coordinate::new(48.8566, 2.3522),
            Coordinate::new(45.764, 4.8357),
        ]
    }

    fn three_origins() -> Vec<Coordinate> {
        vec![
            Coordinate::new(45.75, 4.85),
            Coordinate::new(45.80, 4.80),
            Coordinate::new(45.70, 4.90),
        ]
    }

    fn run(
        routing: &StubRoutingClient,
        origins: &[Coordinate],
        constraint: ConstraintSpec,
    ) -> SearchResult {
        MeetingPointSelector::new(routing, config())
            .expect("config is valid")
            .search(origins, TravelProfile::DrivingCar, &constraint)
            .expect("search should run")
    }

    #[test]
    fn test_paris_lyon_within_five_hours() {
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE);
        let constraint = ConstraintSpec::time(300.0).expect("test invariant failed");
        let result = run(&routing, &paris_lyon(), constraint);
        let SearchResult::Complete(best) = result else {
            panic!("expected complete result, found {result:?}");
        };
        assert!(best.is_complete(2));
        assert!(best.score <= 300.0);
        assert!(best.point.lat < 48.8566 && best.point.lat > 45.764);
        assert!(best.point.lon > 2.3522 && best.point.lon < 4.8357);
        assert_eq!(routing.calls(), 200);
    }

    #[test]
    fn test_paris_lyon_within_one_minute_not_found() {
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE);
        let constraint = ConstraintSpec::time(1.0).expect("test invariant failed");
        let result = run(&routing, &paris_lyon(), constraint);
        assert_eq!(result, SearchResult::NotFound { reason: None });
        // every candidate is rejected on its first origin
        assert_eq!(routing.calls(), 100);
    }

    #[test]
    fn test_loose_constraint_is_complete_with_best_score() {
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE);
        let origins = three_origins();
        let constraint = ConstraintSpec::distance(10_000.0).expect("test invariant failed");
        let result = run(&routing, &origins, constraint);
        let SearchResult::Complete(best) = result else {
            panic!("expected complete result, found {result:?}");
        };
        assert_eq!(best.represented_origins(), origins.len());
        // exhaustive check of the lattice against the stub's distance model
        let grid = GridBuilder::new(GridConfig::default())
            .expect("config is valid")
            .build(&origins)
            .expect("grid should build");
        let worst_leg = |p: &Coordinate| {
            origins
                .iter()
                .map(|o| o.degree_distance(p) * KM_PER_DEGREE)
                .fold(f64::MIN, f64::max)
        };
        let lowest = grid
            .points()
            .iter()
            .map(worst_leg)
            .fold(f64::MAX, f64::min);
        assert!((best.score - lowest).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_search_is_identical() {
        let origins = three_origins();
        let constraint = ConstraintSpec::time(8.0).expect("test invariant failed");
        let first = run(
            &StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE),
            &origins,
            constraint,
        );
        let second = run(
            &StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE),
            &origins,
            constraint,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_rate_limit_returns_candidate_accepted_before() {
        // calls 1-3 accept the first candidate, call 5 is rate limited while
        // evaluating the second candidate
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE).rate_limited_on(5);
        let origins = three_origins();
        let constraint = ConstraintSpec::time(600.0).expect("test invariant failed");
        let result = run(&routing, &origins, constraint);
        let first_candidate = GridBuilder::new(GridConfig::default())
            .expect("config is valid")
            .build(&origins)
            .expect("grid should build")
            .points()[0];
        match result {
            SearchResult::Degraded {
                best,
                reason,
                evaluated,
                total,
            } => {
                assert_eq!(best.point, first_candidate);
                assert!(best.is_complete(3));
                assert_eq!(reason, DegradationReason::RateLimited);
                assert_eq!(evaluated, 1);
                assert_eq!(total, 100);
            }
            other => panic!("expected degraded result, found {other:?}"),
        }
        // no lattice point is tried after the rate limit
        assert_eq!(routing.calls(), 5);
    }

    #[test]
    fn test_rate_limit_before_any_acceptance_is_not_found() {
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE).rate_limited_on(2);
        let constraint = ConstraintSpec::time(600.0).expect("test invariant failed");
        let result = run(&routing, &three_origins(), constraint);
        assert_eq!(
            result,
            SearchResult::NotFound {
                reason: Some(DegradationReason::RateLimited)
            }
        );
        assert_eq!(routing.calls(), 2);
    }

    #[test]
    fn test_rate_limit_stops_at_nth_call() {
        let origins = three_origins();
        let constraint = ConstraintSpec::time(600.0).expect("test invariant failed");
        for n in [1, 3, 4, 7, 12, 31] {
            let routing =
                StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE).rate_limited_on(n);
            let result = run(&routing, &origins, constraint);
            assert_eq!(routing.calls(), n);
            let accepted_before = (n - 1) / origins.len();
            match result {
                SearchResult::Degraded { evaluated, .. } => {
                    assert!(accepted_before > 0);
                    assert_eq!(evaluated, accepted_before);
                }
                SearchResult::NotFound { reason } => {
                    assert_eq!(accepted_before, 0);
                    assert_eq!(reason, Some(DegradationReason::RateLimited));
                }
                SearchResult::Complete(_) => panic!("rate limited search cannot be complete"),
            }
        }
    }

    #[test]
    fn test_elapsed_timeout_degrades_before_routing() {
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE);
        let config = SearchConfig {
            search_timeout_secs: Some(0),
            show_progress: false,
            ..Default::default()
        };
        let constraint = ConstraintSpec::time(600.0).expect("test invariant failed");
        let result = MeetingPointSelector::new(&routing, config)
            .expect("config is valid")
            .search(&three_origins(), TravelProfile::DrivingCar, &constraint)
            .expect("search should run");
        assert_eq!(
            result,
            SearchResult::NotFound {
                reason: Some(DegradationReason::TimedOut)
            }
        );
        assert_eq!(routing.calls(), 0);
    }

    #[test]
    fn test_rejects_single_origin() {
        let routing = StubRoutingClient::new(MINUTES_PER_DEGREE, KM_PER_DEGREE);
        let constraint = ConstraintSpec::time(60.0).expect("test invariant failed");
        let result = MeetingPointSelector::new(&routing, config())
            .expect("config is valid")
            .search(
                &[Coordinate::new(45.0, 5.0)],
                TravelProfile::DrivingCar,
                &constraint,
            );
        assert!(result.is_err());
        assert_eq!(routing.calls(), 0);
    }
}
