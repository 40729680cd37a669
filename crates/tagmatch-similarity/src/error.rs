// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodingError>;

/// Input bytes were not valid UTF-8.
///
/// Raised only by [`crate::score_bytes`]: the caller handed over undecoded
/// text. Never recovered internally, since silently substituting characters
/// would corrupt match quality.
#[derive(Debug, Error)]
#[error("input is not valid UTF-8: {0}")]
pub struct EncodingError(#[from] pub std::str::Utf8Error);
