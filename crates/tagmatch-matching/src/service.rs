// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use tracing::{debug, warn};

use crate::compare::{compare_tags, LocalTags, MatchWeights};
use crate::error::{MatchingError, MatchingResult};
use crate::lookup::{FingerprintId, MetadataSource, RecordingCandidate};

/// A candidate recording with its computed match confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    pub candidate: RecordingCandidate,
    pub confidence: f32,
}

/// Track matching engine.
///
/// Orchestrates the identification workflow:
/// 1. Forwards the file's fingerprint to the metadata source
/// 2. Ranks the returned candidates against the local tags by weighted
///    string similarity
/// 3. Auto-selects the best candidate when it clears the confidence
///    threshold, or reports low confidence for manual review
pub struct TrackMatchingService<S> {
    source: S,
    weights: MatchWeights,
}

impl<S: MetadataSource> TrackMatchingService<S> {
    pub fn new(source: S, weights: MatchWeights) -> Self {
        Self { source, weights }
    }

    /// Identify a local file against the metadata database.
    ///
    /// Returns the best candidate iff its confidence reaches `min_confidence`.
    ///
    /// # Errors
    ///
    /// * [`MatchingError::InvalidThreshold`] if `min_confidence` is outside [0, 1]
    /// * [`MatchingError::NoCandidates`] if the source returns nothing
    /// * [`MatchingError::LowConfidence`] if the best candidate falls short
    pub async fn identify(
        &self,
        local: &LocalTags,
        fingerprint: &FingerprintId,
        min_confidence: f32,
    ) -> MatchingResult<CandidateMatch> {
        if !(0.0..=1.0).contains(&min_confidence) {
            return Err(MatchingError::InvalidThreshold(min_confidence));
        }

        let candidates = self.source.candidates(fingerprint).await?;
        if candidates.is_empty() {
            warn!(
                target: "matching",
                fingerprint = %fingerprint,
                "metadata source returned no candidates"
            );
            return Err(MatchingError::NoCandidates(fingerprint.to_string()));
        }

        let ranked = self.rank_candidates(local, candidates);
        let best = ranked.into_iter().next().expect("ranked list is non-empty");

        debug!(
            target: "matching",
            fingerprint = %fingerprint,
            recording_id = %best.candidate.recording_id,
            confidence = best.confidence,
            "best candidate selected"
        );

        if best.confidence < min_confidence {
            return Err(MatchingError::LowConfidence {
                score: best.confidence,
                threshold: min_confidence,
            });
        }

        Ok(best)
    }

    /// Rank candidates against local tags, best first.
    ///
    /// Stable on confidence ties: candidates keep the order the source
    /// returned them in, so review UIs render reproducibly.
    pub fn rank_candidates(
        &self,
        local: &LocalTags,
        candidates: Vec<RecordingCandidate>,
    ) -> Vec<CandidateMatch> {
        let mut ranked: Vec<CandidateMatch> = candidates
            .into_iter()
            .map(|candidate| {
                let confidence = compare_tags(local, &candidate, &self.weights);
                CandidateMatch {
                    candidate,
                    confidence,
                }
            })
            .collect();

        ranked.sort_by(|left, right| right.confidence.total_cmp(&left.confidence));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubSource {
        candidates: Vec<RecordingCandidate>,
    }

    #[async_trait]
    impl MetadataSource for StubSource {
        async fn candidates(
            &self,
            _fingerprint: &FingerprintId,
        ) -> MatchingResult<Vec<RecordingCandidate>> {
            Ok(self.candidates.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl MetadataSource for FailingSource {
        async fn candidates(
            &self,
            _fingerprint: &FingerprintId,
        ) -> MatchingResult<Vec<RecordingCandidate>> {
            Err(MatchingError::Lookup("connection refused".to_string()))
        }
    }

    fn candidate(id: &str, title: &str, artist: &str, album: &str) -> RecordingCandidate {
        RecordingCandidate {
            recording_id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
        }
    }

    fn local(title: &str, artist: &str, album: &str) -> LocalTags {
        LocalTags {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
        }
    }

    #[tokio::test]
    async fn identifies_best_candidate_above_threshold() {
        let source = StubSource {
            candidates: vec![
                candidate("r1", "Roygbiv", "Boards of Canada", "Music Has the Right to Children"),
                candidate("r2", "Rue the Whirl", "Boards of Canada", "Music Has the Right to Children"),
            ],
        };
        let service = TrackMatchingService::new(source, MatchWeights::default());

        let result = service
            .identify(
                &local("ROYGBIV", "boards of canada", "music has the right to children"),
                &FingerprintId::new("fp-1"),
                0.9,
            )
            .await
            .expect("exact tags should identify");

        assert_eq!(result.candidate.recording_id, "r1");
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn rejects_invalid_threshold() {
        let service = TrackMatchingService::new(
            StubSource { candidates: vec![] },
            MatchWeights::default(),
        );

        let result = service
            .identify(&local("a", "b", "c"), &FingerprintId::new("fp-1"), 1.5)
            .await;

        assert!(matches!(result, Err(MatchingError::InvalidThreshold(_))));
    }

    #[tokio::test]
    async fn empty_candidate_list_is_an_error() {
        let service = TrackMatchingService::new(
            StubSource { candidates: vec![] },
            MatchWeights::default(),
        );

        let result = service
            .identify(&local("a", "b", "c"), &FingerprintId::new("fp-2"), 0.5)
            .await;

        assert!(matches!(result, Err(MatchingError::NoCandidates(fp)) if fp == "fp-2"));
    }

    #[tokio::test]
    async fn low_confidence_surfaces_as_error() {
        let source = StubSource {
            candidates: vec![candidate("r1", "Unrelated Song", "Someone Else", "Different Album")],
        };
        let service = TrackMatchingService::new(source, MatchWeights::default());

        let result = service
            .identify(
                &local("Wildlife Analysis", "Boards of Canada", "Music Has the Right to Children"),
                &FingerprintId::new("fp-3"),
                0.85,
            )
            .await;

        assert!(matches!(
            result,
            Err(MatchingError::LowConfidence { threshold, .. }) if threshold == 0.85
        ));
    }

    #[tokio::test]
    async fn lookup_failures_propagate() {
        let service = TrackMatchingService::new(FailingSource, MatchWeights::default());

        let result = service
            .identify(&local("a", "b", "c"), &FingerprintId::new("fp-4"), 0.5)
            .await;

        assert!(matches!(result, Err(MatchingError::Lookup(_))));
    }

    #[tokio::test]
    async fn ranking_is_stable_for_equal_confidence() {
        let source = StubSource {
            candidates: vec![
                candidate("first", "Same Title", "Same Artist", "Same Album"),
                candidate("second", "Same Title", "Same Artist", "Same Album"),
            ],
        };
        let service = TrackMatchingService::new(source, MatchWeights::default());

        let ranked = service.rank_candidates(
            &local("Same Title", "Same Artist", "Same Album"),
            vec![
                candidate("first", "Same Title", "Same Artist", "Same Album"),
                candidate("second", "Same Title", "Same Artist", "Same Album"),
            ],
        );

        assert_eq!(ranked[0].candidate.recording_id, "first");
        assert_eq!(ranked[1].candidate.recording_id, "second");
        assert_eq!(ranked[0].confidence, ranked[1].confidence);
    }
}
