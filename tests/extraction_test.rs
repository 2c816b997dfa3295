//! Integration tests for entity extraction and the pattern finder.

use textsift::{extract_entities, find_patterns};

mod common;
use common::*;

mod entity_tests {
    use super::*;

    #[test]
    fn test_info_text_entities() {
        let found = extract_entities(INFO_TEXT);

        assert_eq!(found.prices, vec!["$1,200.50"]);
        assert_eq!(found.percentages, vec!["10%"]);
        assert_eq!(found.years, vec!["2023"]);
        assert_eq!(found.questions, vec!["What next?"]);
        assert_eq!(found.quoted_text, vec!["Growth was amazing!"]);
    }

    #[test]
    fn test_sentence_split_ignores_numeric_context() {
        // The decimal point inside a price also ends a sentence.
        let found = extract_entities(INFO_TEXT);
        assert_eq!(
            found.sentences,
            vec![
                "In 2023, revenue was $1,200.",
                "50 (up 10%).",
                "\"Growth was amazing!",
                "\" said the CEO.",
                "What next?",
            ]
        );
    }

    #[test]
    fn test_classes_overlap() {
        let text = r#"She asked "Ready?" twice."#;
        let found = extract_entities(text);
        assert_eq!(found.quoted_text, vec!["Ready?"]);
        assert_eq!(found.questions, vec![r#"She asked "Ready?"#]);
    }

    #[test]
    fn test_sentences_span_lines_and_are_trimmed() {
        let found = extract_entities("  first part\nsecond part.  \n\nnext!");
        assert_eq!(found.sentences, vec!["first part\nsecond part.", "next!"]);
    }

    #[test]
    fn test_trailing_fragment_is_not_a_sentence() {
        let found = extract_entities("Done. no terminator here");
        assert_eq!(found.sentences, vec!["Done."]);
    }

    #[test]
    fn test_percentages() {
        let found = extract_entities("Rates: 5%, 12.5% and 0.75%; not %3 or 7 %.");
        assert_eq!(found.percentages, vec!["5%", "12.5%", "0.75%"]);
    }

    #[test]
    fn test_prices_in_order_of_appearance() {
        let found = extract_entities("Now $5.99, was $10, list $1,000,000.00");
        assert_eq!(found.prices, vec!["$5.99", "$10", "$1,000,000.00"]);
    }

    #[test]
    fn test_multiline_quotes() {
        let text = "He wrote \"line one\nline two\" and \"x\".";
        let found = extract_entities(text);
        assert_eq!(found.quoted_text, vec!["line one\nline two", "x"]);
        assert_quotes_in_source(&found, text);
    }

    #[test]
    fn test_empty_quotes_kept() {
        let found = extract_entities(r#"say "" then "hi""#);
        assert_eq!(found.quoted_text, vec!["", "hi"]);
    }

    #[test]
    fn test_empty_text() {
        let found = extract_entities("");
        assert!(found.prices.is_empty());
        assert!(found.percentages.is_empty());
        assert!(found.years.is_empty());
        assert!(found.sentences.is_empty());
        assert!(found.questions.is_empty());
        assert!(found.quoted_text.is_empty());
    }
}

mod pattern_finder_tests {
    use super::*;

    #[test]
    fn test_pattern_text() {
        let found = find_patterns(PATTERN_TEXT);

        assert_eq!(found.decimals, vec!["45.67"]);
        assert_eq!(found.integers, vec!["2025"]);
        assert_eq!(found.words_with_digits, vec!["45", "67", "A123", "2025"]);
        assert_eq!(found.capitalized_words, vec!["The"]);
        assert_eq!(found.all_caps_words, vec!["ID", "CODE", "ABC", "SHOUT", "WOW"]);
        assert_eq!(found.repeated_chars, vec!["dollars"]);
    }

    #[test]
    fn test_repeated_characters() {
        let found = find_patterns("Books need 1100 small apples, not ABBA's");
        assert_eq!(
            found.repeated_chars,
            vec!["Books", "need", "1100", "small", "apples", "ABBA"]
        );
    }

    #[test]
    fn test_integers_skip_decimal_halves() {
        let found = find_patterns("3.14 and 42 and 2.0");
        assert_eq!(found.integers, vec!["42"]);
        assert_eq!(found.decimals, vec!["3.14", "2.0"]);
    }
}
