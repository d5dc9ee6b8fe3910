/*!
 * Line alignment between a reference text and a compared text.
 *
 * Each reference line is paired with at most one compare line, classifying
 * document-level changes as deleted, modified or added. Matching is greedy:
 * lines are processed in reference order and each takes the best-scoring
 * unused compare line, with ties going to the earlier compare line (strict
 * `>` when tracking the maximum). The pass is total; malformed or empty
 * input just yields more deleted/added records.
 */

use serde::{Deserialize, Serialize};

use crate::comparison::fuzzy::ratio;
use crate::comparison::normalize::normalize_text;

/// Similarity at or above which a matched line pair counts as unchanged
pub const DEFAULT_UNCHANGED_THRESHOLD: f32 = 0.98;

/// A reference line with no acceptable match on the compare side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletedLine {
    /// The original reference line, verbatim
    pub old: String,
}

/// A reference line matched to a compare line that is not an exact-enough match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedLine {
    /// The original reference line, verbatim
    pub old: String,
    /// The best-matching compare line, verbatim
    pub new: String,
    /// Similarity of the normalized pair, in [0, 100)
    pub similarity: f32,
}

/// A compare line never consumed as a match for any reference line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedLine {
    /// The new line, verbatim
    pub new: String,
}

/// Structured line-level diff between two texts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineDiff {
    /// Reference lines with no match, in reference order
    pub deleted: Vec<DeletedLine>,
    /// Matched but changed lines, in reference order
    pub modified: Vec<ModifiedLine>,
    /// Unmatched compare lines, in compare order
    pub added: Vec<AddedLine>,
}

impl LineDiff {
    /// True when the two texts aligned without any recorded difference
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty() && self.modified.is_empty() && self.added.is_empty()
    }
}

/// Align lines with the default unchanged threshold.
pub fn align_lines<S: AsRef<str>>(reference_lines: &[S], compare_lines: &[S]) -> LineDiff {
    align_lines_with(reference_lines, compare_lines, DEFAULT_UNCHANGED_THRESHOLD)
}

/// Align `reference_lines` against `compare_lines`.
///
/// Per reference line, in order:
/// - a line that normalizes to empty is invisible to the diff and skipped;
/// - otherwise every unused, non-blank compare line is scored and the maximum
///   taken (first seen wins ties); a zero ratio never counts as a candidate;
/// - a found candidate is consumed: below `unchanged_threshold` it becomes a
///   `ModifiedLine`, at or above it the pair is silently unchanged;
/// - with no candidate the reference line is a `DeletedLine`.
///
/// Compare lines never consumed end up as `AddedLine`s in original order.
/// Each compare index is used at most once across the whole pass.
pub fn align_lines_with<S: AsRef<str>>(
    reference_lines: &[S],
    compare_lines: &[S],
    unchanged_threshold: f32,
) -> LineDiff {
    let mut diff = LineDiff::default();
    let mut used = vec![false; compare_lines.len()];

    // Compare-side normalizations are reused across every reference line
    let normalized_compare: Vec<String> = compare_lines
        .iter()
        .map(|line| normalize_text(line.as_ref()))
        .collect();

    for ref_line in reference_lines {
        let norm_ref = normalize_text(ref_line.as_ref());
        if norm_ref.is_empty() {
            continue;
        }

        let mut best_match: Option<(usize, f32)> = None;
        for (cmp_idx, norm_cmp) in normalized_compare.iter().enumerate() {
            if used[cmp_idx] || norm_cmp.is_empty() {
                continue;
            }
            let similarity = ratio(&norm_ref, norm_cmp);
            let improves = match best_match {
                Some((_, best_similarity)) => similarity > best_similarity,
                None => similarity > 0.0,
            };
            if improves {
                best_match = Some((cmp_idx, similarity));
            }
        }

        match best_match {
            Some((cmp_idx, similarity)) => {
                used[cmp_idx] = true;
                if similarity < unchanged_threshold {
                    diff.modified.push(ModifiedLine {
                        old: ref_line.as_ref().to_string(),
                        new: compare_lines[cmp_idx].as_ref().to_string(),
                        similarity: similarity * 100.0,
                    });
                }
            }
            None => diff.deleted.push(DeletedLine {
                old: ref_line.as_ref().to_string(),
            }),
        }
    }

    for (cmp_idx, line) in compare_lines.iter().enumerate() {
        if !used[cmp_idx] {
            diff.added.push(AddedLine {
                new: line.as_ref().to_string(),
            });
        }
    }

    diff
}
