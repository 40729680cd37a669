// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type MatchingResult<T> = std::result::Result<T, MatchingError>;

/// Errors that can occur during track matching
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("metadata source lookup failed: {0}")]
    Lookup(String),

    #[error("no candidates returned for fingerprint {0}")]
    NoCandidates(String),

    #[error("confidence score {score} below threshold {threshold}")]
    LowConfidence { score: f32, threshold: f32 },

    #[error("invalid confidence threshold: {0}")]
    InvalidThreshold(f32),
}
