use serde::{Deserialize, Serialize};

use super::CandidateResult;

/// why a search stopped before evaluating the whole lattice.
#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DegradationReason {
    /// the routing service reported that its quota was exceeded
    RateLimited,
    /// the configured search timeout elapsed
    TimedOut,
}

impl std::fmt::Display for DegradationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegradationReason::RateLimited => write!(f, "routing service rate limit reached"),
            DegradationReason::TimedOut => write!(f, "search timeout reached"),
        }
    }
}

/// terminal outcome of a meeting point search.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResult {
    /// the full lattice was evaluated and the best complete candidate was found
    Complete(CandidateResult),
    /// the search was interrupted; `best` is the best candidate accepted before
    /// the interruption, after `evaluated` of `total` lattice points.
    Degraded {
        best: CandidateResult,
        reason: DegradationReason,
        evaluated: usize,
        total: usize,
    },
    /// no candidate satisfied the constraint. carries the interruption reason
    /// if the lattice was not fully evaluated.
    NotFound { reason: Option<DegradationReason> },
}

#[derive(Debug, Serialize, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Complete,
    Degraded,
    NotFound,
}

impl SearchResult {
    pub fn candidate(&self) -> Option<&CandidateResult> {
        match self {
            SearchResult::Complete(candidate) => Some(candidate),
            SearchResult::Degraded { best, .. } => Some(best),
            SearchResult::NotFound { .. } => None,
        }
    }

    pub fn status(&self) -> SearchStatus {
        match self {
            SearchResult::Complete(_) => SearchStatus::Complete,
            SearchResult::Degraded { .. } => SearchStatus::Degraded,
            SearchResult::NotFound { .. } => SearchStatus::NotFound,
        }
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SearchStatus::Complete => "complete",
            SearchStatus::Degraded => "degraded",
            SearchStatus::NotFound => "not_found",
        };
        write!(f, "{s}")
    }
}
