/*!
 * Text normalization and word extraction for OCR output.
 *
 * OCR text carries heavy surface noise: inconsistent casing, stray punctuation,
 * ragged whitespace. Normalization flattens all of that so downstream similarity
 * scoring only sees the characters that matter.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum character length for a word to count as meaningful
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex literal"));

/// Canonicalize text for comparison.
///
/// Lowercases, strips every character that is not alphanumeric or whitespace,
/// collapses whitespace runs to single spaces and trims the ends. Pure and
/// idempotent; empty input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    WHITESPACE_RUNS.replace_all(&stripped, " ").trim().to_string()
}

/// Extract the meaningful words from a text.
///
/// Normalizes first, then keeps every whitespace-separated token that is at
/// least `min_length` characters long and is not purely numeric. Order of
/// first appearance is preserved and duplicates are retained; the word matcher
/// pairs repeats by index, not by set identity.
pub fn extract_words(text: &str, min_length: usize) -> Vec<String> {
    normalize_text(text)
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_length && !word.chars().all(|c| c.is_numeric()))
        .map(str::to_string)
        .collect()
}
