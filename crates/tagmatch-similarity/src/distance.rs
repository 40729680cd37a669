// SPDX-License-Identifier: GPL-3.0-or-later

use crate::normalize::ComparisonString;

/// Compute the similarity score between two normalized strings.
///
/// The score is `1 - distance / max(len_a, len_b)` where `distance` is the
/// Levenshtein edit distance over code points (insert, delete, substitute,
/// each cost 1). Two empty strings score 1.0 by definition. The result is
/// clamped to [0.0, 1.0] in case the cost model ever changes.
///
/// Pure and deterministic: identical inputs yield the identical bit-for-bit
/// result.
pub fn similarity(a: &ComparisonString, b: &ComparisonString) -> f32 {
    if a == b {
        // Covers the empty/empty case as well.
        return 1.0;
    }

    let a_chars: Vec<char> = a.as_str().chars().collect();
    let b_chars: Vec<char> = b.as_str().chars().collect();
    let max_len = a_chars.len().max(b_chars.len());

    let distance = edit_distance(&a_chars, &b_chars) as f32;
    (1.0 - distance / max_len as f32).clamp(0.0, 1.0)
}

/// Levenshtein distance with two rolling rows.
///
/// The rows are allocated over the shorter input, keeping memory at
/// O(min(len)) rather than O(len(a) * len(b)). Batch ranking calls this in a
/// hot loop, so the full matrix is never materialized.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if inner.is_empty() {
        return outer.len();
    }

    let mut previous_row: Vec<usize> = (0..=inner.len()).collect();
    let mut current_row: Vec<usize> = vec![0; inner.len() + 1];

    for (outer_index, outer_char) in outer.iter().enumerate() {
        current_row[0] = outer_index + 1;
        for (inner_index, inner_char) in inner.iter().enumerate() {
            let insert_cost = current_row[inner_index] + 1;
            let delete_cost = previous_row[inner_index + 1] + 1;
            let replace_cost = previous_row[inner_index] + usize::from(outer_char != inner_char);
            current_row[inner_index + 1] = insert_cost.min(delete_cost).min(replace_cost);
        }
        std::mem::swap(&mut previous_row, &mut current_row);
    }

    previous_row[inner.len()]
}
