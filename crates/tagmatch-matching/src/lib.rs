// SPDX-License-Identifier: GPL-3.0-or-later

//! Metadata matching workflow for the tagger.
//!
//! The matching engine takes the tags read from a local audio file, asks a
//! metadata source for candidate recordings (keyed by an opaque audio
//! fingerprint produced elsewhere), and ranks the candidates by weighted
//! string similarity so the best one can be auto-selected or offered for
//! review.

pub mod compare;
pub mod error;
pub mod lookup;
pub mod service;

pub use compare::{compare_tags, LocalTags, MatchWeights};
pub use error::{MatchingError, MatchingResult};
pub use lookup::{FingerprintId, MetadataSource, RecordingCandidate};
pub use service::{CandidateMatch, TrackMatchingService};
