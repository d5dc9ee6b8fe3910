/*!
 * # ocrdiff - fuzzy comparison of OCR-extracted text
 *
 * A Rust library for comparing two blocks of OCR output: an overall
 * word-level similarity score plus a line-level diff classifying every
 * reference line as deleted, modified or carried over, and every leftover
 * compare line as added.
 *
 * ## Features
 *
 * - Aggressive text normalization tuned for OCR noise (case, punctuation,
 *   whitespace)
 * - Longest-matching-blocks similarity ratio, tolerant of character-level
 *   OCR errors
 * - Greedy word pairing producing a 0-100 similarity percentage
 * - Greedy line alignment producing a structured deleted/modified/added diff
 * - Pluggable OCR providers (Google Cloud Vision, mock)
 * - Monthly usage quota gate backed by a JSON counter file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `comparison`: The pure comparison core:
 *   - `comparison::normalize`: Text canonicalization and word extraction
 *   - `comparison::fuzzy`: Similarity ratio and word-level fuzzy matching
 *   - `comparison::word_match`: Whole-text similarity scoring
 *   - `comparison::line_align`: Line-level diff classification
 * - `providers`: OCR backend clients behind the `OcrProvider` trait
 * - `usage`: The `UsageGate` quota capability and its file-backed tracker
 * - `app_config`: Configuration management
 * - `app_controller`: Orchestration of gate, provider and comparison
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod comparison;
pub mod errors;
pub mod providers;
pub mod usage;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{ComparisonReport, Controller};
pub use comparison::{
    align_lines, extract_words, fuzzy_match_words, normalize_text, ratio, text_similarity,
    ComparisonConfig, ComparisonResult, ComparisonService, LineDiff,
};
pub use errors::{AppError, OcrError, UsageError};
pub use providers::OcrProvider;
pub use usage::{FileUsageTracker, UsageGate, UsageSnapshot};
