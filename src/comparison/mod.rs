/*!
 * Fuzzy text comparison between two OCR-extracted texts.
 *
 * This module is the algorithmic core of ocrdiff. It is pure and synchronous:
 * no I/O, no shared state, no failure modes. Two independent paths consume
 * the shared normalization and similarity primitives:
 * - `word_match`: greedy word pairing producing an overall similarity score
 * - `line_align`: greedy line alignment producing a structured diff
 *
 * `ComparisonService` runs both paths and assembles the caller-facing result.
 */

pub mod fuzzy;
pub mod line_align;
pub mod normalize;
pub mod word_match;

use serde::{Deserialize, Serialize};

pub use fuzzy::{fuzzy_match_words, ratio, DEFAULT_FUZZY_THRESHOLD};
pub use line_align::{
    align_lines, align_lines_with, AddedLine, DeletedLine, LineDiff, ModifiedLine,
    DEFAULT_UNCHANGED_THRESHOLD,
};
pub use normalize::{extract_words, normalize_text, DEFAULT_MIN_WORD_LENGTH};
pub use word_match::{text_similarity, text_similarity_with};

/// Tuning knobs for the comparison core
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Minimum character length for a word to be considered meaningful
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,

    /// Word-level fuzzy match threshold in [0, 1]
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f32,

    /// Line similarity in [0, 1] at or above which a match counts as unchanged
    #[serde(default = "default_unchanged_threshold")]
    pub unchanged_threshold: f32,
}

fn default_min_word_length() -> usize {
    DEFAULT_MIN_WORD_LENGTH
}

fn default_fuzzy_threshold() -> f32 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_unchanged_threshold() -> f32 {
    DEFAULT_UNCHANGED_THRESHOLD
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            min_word_length: default_min_word_length(),
            fuzzy_threshold: default_fuzzy_threshold(),
            unchanged_threshold: default_unchanged_threshold(),
        }
    }
}

/// Full comparison outcome for a pair of texts.
///
/// `deleted` and `modified` follow reference-line order, interleaved by which
/// outcome each line received; `added` follows compare-line order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Overall word-level similarity, in [0, 100]
    pub similarity: f32,
    /// Reference lines with no match
    pub deleted: Vec<DeletedLine>,
    /// Matched but changed line pairs
    pub modified: Vec<ModifiedLine>,
    /// Compare lines never consumed by a match
    pub added: Vec<AddedLine>,
}

/// Stateless comparison service over a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ComparisonService {
    config: ComparisonConfig,
}

impl ComparisonService {
    /// Create a service with the given configuration.
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Compare a reference text against another text.
    ///
    /// Runs the word-level scorer over the whole texts and the line aligner
    /// over their newline-split forms. Total over all inputs, including empty
    /// strings.
    pub fn compare(&self, reference_text: &str, compared_text: &str) -> ComparisonResult {
        let similarity = text_similarity_with(
            reference_text,
            compared_text,
            self.config.min_word_length,
            self.config.fuzzy_threshold,
        );

        let reference_lines: Vec<&str> = reference_text.lines().collect();
        let compare_lines: Vec<&str> = compared_text.lines().collect();
        let diff = align_lines_with(&reference_lines, &compare_lines, self.config.unchanged_threshold);

        ComparisonResult {
            similarity,
            deleted: diff.deleted,
            modified: diff.modified,
            added: diff.added,
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }
}
