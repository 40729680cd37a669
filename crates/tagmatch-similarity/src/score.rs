// SPDX-License-Identifier: GPL-3.0-or-later

use crate::distance::similarity;
use crate::error::Result;
use crate::normalize::normalize;

/// Score two raw strings for approximate similarity.
///
/// Both inputs are normalized independently (case folding, diacritic
/// stripping, whitespace collapsing) and scored with the edit-distance
/// metric. The result is in [0.0, 1.0]: 1.0 for strings that normalize
/// identically, 0.0 when either side is empty after normalization and the
/// other is not.
///
/// Infallible: `&str` is already valid UTF-8. Callers holding undecoded
/// bytes go through [`score_bytes`].
pub fn score(reference: &str, candidate: &str) -> f32 {
    similarity(&normalize(reference), &normalize(candidate))
}

/// Score two undecoded byte strings.
///
/// Validates both inputs as UTF-8 before scoring and surfaces
/// [`crate::EncodingError`] unmodified if either is invalid.
pub fn score_bytes(reference: &[u8], candidate: &[u8]) -> Result<f32> {
    let reference = std::str::from_utf8(reference)?;
    let candidate = std::str::from_utf8(candidate)?;
    Ok(score(reference, candidate))
}
