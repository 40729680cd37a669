// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A string reduced to its comparison-ready form.
///
/// Invariants: case-folded, no combining diacritical marks, no control
/// characters, interior whitespace collapsed to single spaces, no leading or
/// trailing whitespace. Built per comparison and discarded after scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonString(String);

impl ComparisonString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in code points, the unit the edit-distance metric operates on.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for ComparisonString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize raw text into a [`ComparisonString`].
///
/// Applies NFKD decomposition, strips combining marks (so "café" and "cafe"
/// compare equal), lowercases per Unicode rules, drops control characters,
/// and collapses whitespace runs. Total function: any input, including the
/// empty string or pure whitespace, yields a valid (possibly empty) result.
pub fn normalize(text: &str) -> ComparisonString {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_whitespace() {
            // Collapse the run; emit nothing until a visible character follows,
            // which also trims leading and trailing whitespace.
            pending_space = !out.is_empty();
            continue;
        }
        if ch.is_control() {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for folded in ch.to_lowercase() {
            out.push(folded);
        }
    }

    ComparisonString(out)
}
