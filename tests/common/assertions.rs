//! Custom assertions for validation and extraction results.

use textsift::{ExtractedEntities, ValidationResult};

/// Asserts that a validation matched with exactly the given fields, in order.
///
/// # Panics
/// Panics if the result did not match or its fields differ.
pub fn assert_fields(result: &ValidationResult, expected: &[(&str, &str)]) {
    assert!(result.matched, "expected a match, got {:?}", result);
    let actual: Vec<(&str, &str)> = result
        .fields
        .iter()
        .map(|(k, v)| (k, v.as_str()))
        .collect();
    assert_eq!(actual, expected, "fields differ");
}

/// Asserts that a validation failed and carries no fields.
pub fn assert_rejected(result: &ValidationResult) {
    assert!(!result.matched, "expected no match, got {:?}", result);
    assert!(result.fields.is_empty(), "rejected result must have no fields");
}

/// Asserts that every quoted string appears between double quotes in `text`.
pub fn assert_quotes_in_source(entities: &ExtractedEntities, text: &str) {
    for quoted in &entities.quoted_text {
        let wrapped = format!("\"{}\"", quoted);
        assert!(
            text.contains(&wrapped),
            "quoted text {:?} not found between quotes in source",
            quoted
        );
    }
}
