// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use tagmatch_similarity::score;

use crate::lookup::RecordingCandidate;

/// Tags read from the local file, as the user currently has them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalTags {
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// Relative weight of each tag field in the overall match confidence.
///
/// Title carries the most signal during track identification; artist and
/// album disambiguate between releases of the same recording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub title: f32,
    pub artist: f32,
    pub album: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            title: 0.45,
            artist: 0.35,
            album: 0.20,
        }
    }
}

/// Compare local tags against a candidate recording.
///
/// Each present local field is scored against the candidate's field and the
/// scores combined by weight. Fields the local file does not carry are
/// skipped and the remaining weights renormalized, so a file tagged with only
/// a title is still matchable. Returns 0.0 when every local field is empty
/// or every weight is zero.
pub fn compare_tags(local: &LocalTags, candidate: &RecordingCandidate, weights: &MatchWeights) -> f32 {
    let fields = [
        (local.title.as_str(), candidate.title.as_str(), weights.title),
        (local.artist.as_str(), candidate.artist.as_str(), weights.artist),
        (local.album.as_str(), candidate.album.as_str(), weights.album),
    ];

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (local_value, candidate_value, weight) in fields {
        if local_value.trim().is_empty() || weight <= 0.0 {
            continue;
        }
        weighted_sum += score(local_value, candidate_value) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return 0.0;
    }

    (weighted_sum / total_weight).clamp(0.0, 1.0)
}
