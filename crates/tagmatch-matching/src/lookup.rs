// SPDX-License-Identifier: GPL-3.0-or-later

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MatchingResult;

/// Opaque identifier derived from audio content.
///
/// Produced by the fingerprinting collaborator outside this crate; the
/// matching engine never looks inside it, only forwards it to the metadata
/// source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerprintId(String);

impl FingerprintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FingerprintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A candidate recording returned by the metadata database for a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingCandidate {
    /// Canonical recording identifier in the remote database.
    pub recording_id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// Source of candidate recordings for a fingerprint.
///
/// Implementations query the remote metadata database; tests use in-memory
/// stubs. Candidate order is meaningful: the ranking step is stable, so the
/// source's order breaks confidence ties.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn candidates(&self, fingerprint: &FingerprintId)
        -> MatchingResult<Vec<RecordingCandidate>>;
}
