/*!
 * Approximate string similarity for OCR comparison.
 *
 * Provides a bounded [0, 1] similarity ratio based on longest matching blocks
 * (Ratcliff/Obershelp), plus the thresholded word-level fuzzy equality test
 * used by the word matcher. The block-based ratio is deliberately preferred
 * over a plain Levenshtein ratio: a one-character suffix such as a plural "s"
 * must still clear the 0.8 word-match threshold for short words, which
 * `1 - distance/max_len` does not guarantee.
 */

/// Similarity threshold for word-level fuzzy matching
pub const DEFAULT_FUZZY_THRESHOLD: f32 = 0.8;

/// Maximum relative length difference before two words are rejected outright
const LENGTH_DIFF_LIMIT: f32 = 0.4;

/// Similarity ratio between two strings, in [0, 1].
///
/// Computed as `2 * M / (len(a) + len(b))` over characters, where M is the
/// total size of the longest matching blocks found recursively. Symmetric,
/// deterministic and total: `ratio(a, a) == 1.0`, two empty strings are
/// identical by convention, and one empty side scores 0.0.
pub fn ratio(a: &str, b: &str) -> f32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matches = matching_chars(&a_chars, &b_chars);
    (2.0 * matches as f32) / total as f32
}

/// Fuzzy equality test between two words.
///
/// False if either word is empty, true on exact equality. Words whose lengths
/// differ by more than 40% of the longer word are rejected without computing
/// the ratio; otherwise the ratio is compared against `threshold`.
pub fn fuzzy_match_words(word1: &str, word2: &str, threshold: f32) -> bool {
    if word1.is_empty() || word2.is_empty() {
        return false;
    }
    if word1 == word2 {
        return true;
    }

    let len1 = word1.chars().count();
    let len2 = word2.chars().count();
    let max_length = len1.max(len2);
    if len1.abs_diff(len2) as f32 > max_length as f32 * LENGTH_DIFF_LIMIT {
        return false;
    }

    ratio(word1, word2) >= threshold
}

/// Total number of matching characters across recursively found common blocks
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_chars(&a[..a_start], &b[..b_start])
        + matching_chars(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block between two character slices.
///
/// Returns `(start_in_a, start_in_b, length)`; ties resolve to the earliest
/// position in `a`, then in `b`. Standard O(len(a) * len(b)) dynamic program
/// keeping one previous row.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev_row = vec![0usize; b.len() + 1];
    let mut curr_row = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        curr_row[0] = 0;
        for j in 0..b.len() {
            if a[i] == b[j] {
                let run = prev_row[j] + 1;
                curr_row[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            } else {
                curr_row[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    best
}
