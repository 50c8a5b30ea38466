use crate::model::CandidateResult;

/// lowest-scoring candidate among those that represent every origin. ties go
/// to the candidate discovered first.
pub fn select_best_complete(
    candidates: &[CandidateResult],
    origin_count: usize,
) -> Option<&CandidateResult> {
    candidates
        .iter()
        .filter(|c| c.is_complete(origin_count))
        .min_by(|a, b| a.score.total_cmp(&b.score))
}

/// best candidate of an interrupted search: the one representing the most
/// origins, then the lowest score, then the first discovered.
pub fn select_best_partial(candidates: &[CandidateResult]) -> Option<&CandidateResult> {
    candidates.iter().min_by(|a, b| {
        b.represented_origins()
            .cmp(&a.represented_origins())
            .then(a.score.total_cmp(&b.score))
    })
}
