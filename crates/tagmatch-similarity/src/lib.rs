// SPDX-License-Identifier: GPL-3.0-or-later

//! Approximate string similarity scoring for metadata matching.
//!
//! This crate provides functionality for:
//! - Normalizing Unicode text into a comparison-ready form (case folding,
//!   diacritic stripping, whitespace collapsing)
//! - Computing a normalized edit-distance similarity score in [0.0, 1.0]
//! - Ranking many candidate strings against one reference string
//!
//! All scoring is pure and deterministic: no I/O, no shared state, identical
//! inputs always produce the identical result.

pub mod distance;
pub mod error;
pub mod normalize;
pub mod rank;
pub mod score;

pub use distance::similarity;
pub use error::{EncodingError, Result};
pub use normalize::{normalize, ComparisonString};
pub use rank::{rank, RankedCandidate};
pub use score::{score, score_bytes};
