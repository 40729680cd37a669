// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use tracing::debug;

use crate::distance::similarity;
use crate::normalize::normalize;

/// A candidate string paired with its similarity score against a fixed
/// reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub candidate: String,
    pub score: f32,
}

/// Rank candidate strings against a reference, best match first.
///
/// The reference is normalized once and every candidate scored against it
/// independently. The result is sorted by score descending with a stable
/// sort, so candidates with equal scores keep their input order — required
/// for reproducible selection when several matches are equally plausible.
///
/// An empty candidate slice yields an empty result.
pub fn rank<S: AsRef<str>>(reference: &str, candidates: &[S]) -> Vec<RankedCandidate> {
    let reference = normalize(reference);

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            let score = similarity(&reference, &normalize(candidate));
            RankedCandidate {
                candidate: candidate.to_string(),
                score,
            }
        })
        .collect();

    // Vec::sort_by is stable; total_cmp gives a total order on f32.
    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));

    debug!(
        target: "similarity",
        candidates = ranked.len(),
        best = ranked.first().map(|r| r.score),
        "ranked candidates"
    );

    ranked
}
