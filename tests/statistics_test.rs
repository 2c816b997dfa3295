//! Integration tests for the text statistics analyzer.

use textsift::analyze_text;

mod common;
use common::*;

#[test]
fn test_sample_text_statistics() {
    let stats = analyze_text(SAMPLE_TEXT);

    assert_eq!(stats.total_chars, 70);
    assert_eq!(stats.total_lines, 3);
    assert_eq!(stats.total_words, 14);
    assert_eq!(stats.avg_word_length, 3.79);
    assert_eq!(stats.most_common_word.as_deref(), Some("is"));
    assert_eq!(
        stats.longest_line.as_deref(),
        Some("This is a test. How many words are here?")
    );
    assert_eq!(stats.words_per_line, vec![2, 9, 3]);
    assert_eq!(stats.questions, 1);
    assert_eq!(stats.exclamations, 2);
    assert!(stats.capitalized_sentences >= 3);
    assert_eq!(stats.capitalized_sentences, 4);
}

#[test]
fn test_words_per_line_aligned_with_lines() {
    let text = "one two\n\n--- !!!\nthree\n";
    let stats = analyze_text(text);
    assert_eq!(stats.total_lines, 4);
    assert_eq!(stats.words_per_line, vec![2, 0, 0, 1]);
}

#[test]
fn test_chars_count_code_points() {
    let stats = analyze_text("héllo wörld");
    assert_eq!(stats.total_chars, 11);
    assert_eq!(stats.avg_word_length, 5.0);
}

#[test]
fn test_punctuation_only_text() {
    let stats = analyze_text("?!. ...");
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.avg_word_length, 0.0);
    assert_eq!(stats.most_common_word, None);
    assert_eq!(stats.total_lines, 1);
}

#[test]
fn test_most_common_word_reaches_maximum() {
    let text = "Red blue. RED green! blue red?";
    let stats = analyze_text(text);
    let winner = stats.most_common_word.expect("text has words");

    let count = |word: &str| {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.eq_ignore_ascii_case(word))
            .count()
    };
    assert_eq!(winner, "red");
    assert_eq!(count(&winner), 3);
}

#[test]
fn test_lowercase_sentences_not_capitalized() {
    let stats = analyze_text("lower start. Upper start! 9 digits first?");
    assert_eq!(stats.capitalized_sentences, 1);
    assert_eq!(stats.questions, 1);
    assert_eq!(stats.exclamations, 1);
}

#[test]
fn test_empty_text_degrades_to_zero() {
    let stats = analyze_text("");
    assert_eq!(stats.total_chars, 0);
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.total_lines, 0);
    assert_eq!(stats.avg_word_length, 0.0);
    assert_eq!(stats.most_common_word, None);
    assert_eq!(stats.longest_line, None);
    assert_eq!(stats.capitalized_sentences, 0);
}
