/*!
 * Word-level similarity scoring between two texts.
 *
 * Pairs words greedily between the two token sequences and reports the share
 * of matched words as a percentage. The matching is greedy, order-biased and
 * one-to-one rather than an optimal bipartite assignment; OCR outputs are
 * short enough that the cheaper scan is accurate in practice, and the
 * resulting determinism (early compare-side words win) is part of the
 * documented behavior.
 */

use crate::comparison::fuzzy::{fuzzy_match_words, DEFAULT_FUZZY_THRESHOLD};
use crate::comparison::normalize::{extract_words, DEFAULT_MIN_WORD_LENGTH};

/// Overall word-level similarity between two texts, in [0, 100].
pub fn text_similarity(text1: &str, text2: &str) -> f32 {
    text_similarity_with(text1, text2, DEFAULT_MIN_WORD_LENGTH, DEFAULT_FUZZY_THRESHOLD)
}

/// Word-level similarity with explicit tokenizer and matcher parameters.
///
/// Both texts empty of meaningful words → 100.0 (vacuously identical);
/// exactly one empty → 0.0. Otherwise each word of `text1`, in order, consumes
/// the first not-yet-used fuzzy-matching word of `text2`, and the score is
/// `matched * 2 / (words1 + words2) * 100`, clamped to [0, 100].
pub fn text_similarity_with(text1: &str, text2: &str, min_word_length: usize, threshold: f32) -> f32 {
    let words1 = extract_words(text1, min_word_length);
    let words2 = extract_words(text2, min_word_length);

    if words1.is_empty() && words2.is_empty() {
        return 100.0;
    }
    if words1.is_empty() || words2.is_empty() {
        return 0.0;
    }

    let mut used2 = vec![false; words2.len()];
    let mut matched_pairs = 0usize;

    for word1 in &words1 {
        for (j, word2) in words2.iter().enumerate() {
            if !used2[j] && fuzzy_match_words(word1, word2, threshold) {
                used2[j] = true;
                matched_pairs += 1;
                break;
            }
        }
    }

    let total_words = words1.len() + words2.len();
    let similarity = (matched_pairs * 2) as f32 / total_words as f32 * 100.0;
    similarity.clamp(0.0, 100.0)
}
