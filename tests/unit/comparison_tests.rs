/*!
 * Tests for the comparison core: end-to-end scenarios over the public API.
 */

use ocrdiff::comparison::{
    align_lines, extract_words, normalize_text, ratio, text_similarity, ComparisonService,
};

#[test]
fn test_normalizeText_matchesAcrossSurfaceNoise() {
    assert_eq!(normalize_text("Hello,  World!"), normalize_text("hello world"));
}

#[test]
fn test_ratio_boundaryContracts() {
    assert_eq!(ratio("", ""), 1.0);
    assert_eq!(ratio("abc", ""), 0.0);
    assert!((ratio("nonempty", "nonempty") - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_textSimilarity_boundaryContracts() {
    assert_eq!(text_similarity("", ""), 100.0);
    assert_eq!(text_similarity("abc", ""), 0.0);
}

#[test]
fn test_alignLines_exactMatch_producesNoRecords() {
    let diff = align_lines(&["The quick brown fox"], &["The quick brown fox"]);
    assert!(diff.deleted.is_empty());
    assert!(diff.modified.is_empty());
    assert!(diff.added.is_empty());
}

#[test]
fn test_alignLines_nearMatch_producesOneModifiedRecord() {
    let diff = align_lines(&["The quick brown fox"], &["The qick brown fox"]);
    assert_eq!(diff.modified.len(), 1);
    let record = &diff.modified[0];
    assert_eq!(record.old, "The quick brown fox");
    assert_eq!(record.new, "The qick brown fox");
    assert!((90.0..99.0).contains(&record.similarity));
}

#[test]
fn test_alignLines_missingReferenceLine_isDeleted() {
    let diff = align_lines(&["Line one", "Line two"], &["Line two"]);
    assert_eq!(diff.deleted.len(), 1);
    assert_eq!(diff.deleted[0].old, "Line one");
    assert!(diff.added.is_empty());
    assert!(diff.modified.is_empty());
}

#[test]
fn test_alignLines_emptyReference_everyCompareLineIsAdded() {
    let reference: Vec<&str> = Vec::new();
    let diff = align_lines(&reference, &vec!["New line"]);
    assert!(diff.deleted.is_empty());
    assert!(diff.modified.is_empty());
    assert_eq!(diff.added.len(), 1);
    assert_eq!(diff.added[0].new, "New line");
}

#[test]
fn test_alignLines_blankReferenceLines_neverAppearInOutput() {
    let diff = align_lines(&["  ", "\t", "visible line"], &["other qqqq line"]);
    for deleted in &diff.deleted {
        assert!(!normalize_text(&deleted.old).is_empty());
    }
    for modified in &diff.modified {
        assert!(!normalize_text(&modified.old).is_empty());
    }
}

#[test]
fn test_alignLines_consumedAndAddedCompareLinesAreDisjoint() {
    let reference = vec!["first reference line", "second reference line", "third line"];
    let compare = vec![
        "first reference lime",
        "completely zzzz qqqq",
        "third line",
        "second reference line",
    ];
    let diff = align_lines(&reference, &compare);

    let consumed: Vec<&str> = diff.modified.iter().map(|m| m.new.as_str()).collect();
    for added in &diff.added {
        assert!(
            !consumed.contains(&added.new.as_str()),
            "compare line double-used: {}",
            added.new
        );
    }
}

#[test]
fn test_textSimilarity_pluralForms_allPairsMatch() {
    assert_eq!(text_similarity("cat dog bird", "cats dogs birds"), 100.0);
}

#[test]
fn test_comparisonService_wholeResultShape() {
    let service = ComparisonService::default();
    let result = service.compare(
        "Invoice number 12345\nTotal amount due\nThank you",
        "Invoice number 12345\nTotal amount dve\nNew footer line",
    );

    // "Thank you" has no candidate above zero overlap with the leftover line
    // or gets matched; either way every reference line got exactly one outcome
    let outcomes = result.deleted.len() + result.modified.len();
    assert!(outcomes <= 3);
    assert!(result.similarity > 0.0 && result.similarity <= 100.0);

    let json = serde_json::to_value(&result).expect("serializable");
    for key in ["similarity", "deleted", "modified", "added"] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
}

#[test]
fn test_extractWords_dropsNumericAndShortTokens() {
    let words = extract_words("page 12 of 99 report", 3);
    assert_eq!(words, vec!["page", "report"]);
}
