//! Entity and token-class extraction.
//!
//! Each class is found by its own scan over the untouched text, so a
//! substring may show up in several classes (a quoted sentence is also a
//! sentence).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::TextPatterns;

/// Entities found in one text, each list in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ExtractedEntities {
    pub prices: Vec<String>,
    pub percentages: Vec<String>,
    pub years: Vec<String>,
    pub sentences: Vec<String>,
    pub questions: Vec<String>,
    pub quoted_text: Vec<String>,
}

impl ExtractedEntities {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
            && self.percentages.is_empty()
            && self.years.is_empty()
            && self.sentences.is_empty()
            && self.questions.is_empty()
            && self.quoted_text.is_empty()
    }
}

/// Numeric and casing token classes found in one text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FoundPatterns {
    pub integers: Vec<String>,
    pub decimals: Vec<String>,
    pub words_with_digits: Vec<String>,
    pub capitalized_words: Vec<String>,
    pub all_caps_words: Vec<String>,
    pub repeated_chars: Vec<String>,
}

struct EntityPatterns;

impl EntityPatterns {
    fn price() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?").expect("Valid price regex")
        });
        &PATTERN
    }

    fn percentage() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?%").expect("Valid percentage regex"));
        &PATTERN
    }

    fn year() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("Valid year regex"));
        &PATTERN
    }

    /// Non-greedy, so quotes pair up left to right.
    fn quoted() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r#"(?s)"(.*?)""#).expect("Valid quote regex"));
        &PATTERN
    }

    fn decimal() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b\d+\.\d+\b").expect("Valid decimal regex"));
        &PATTERN
    }

    fn integer() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b\d+\b").expect("Valid integer regex"));
        &PATTERN
    }

    fn word_with_digit() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b\w*\d\w*\b").expect("Valid regex"));
        &PATTERN
    }

    fn capitalized() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").expect("Valid regex"));
        &PATTERN
    }

    fn all_caps() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\b[A-Z]{2,}\b").expect("Valid regex"));
        &PATTERN
    }
}

fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Scans `text` for prices, percentages, years, sentences, questions, and
/// double-quoted passages.
pub fn extract_entities(text: &str) -> ExtractedEntities {
    let sentences: Vec<String> = TextPatterns::sentences(text).map(str::to_string).collect();
    let questions = sentences
        .iter()
        .filter(|s| s.ends_with('?'))
        .cloned()
        .collect();
    let quoted_text = EntityPatterns::quoted()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    ExtractedEntities {
        prices: find_all(EntityPatterns::price(), text),
        percentages: find_all(EntityPatterns::percentage(), text),
        years: find_all(EntityPatterns::year(), text),
        sentences,
        questions,
        quoted_text,
    }
}

/// Scans `text` for numeric tokens and casing classes.
///
/// Integers are collected after every decimal has been blanked out, so the
/// halves of `45.67` are not reported as integers.
pub fn find_patterns(text: &str) -> FoundPatterns {
    let without_decimals = EntityPatterns::decimal().replace_all(text, " ");

    FoundPatterns {
        integers: find_all(EntityPatterns::integer(), &without_decimals),
        decimals: find_all(EntityPatterns::decimal(), text),
        words_with_digits: find_all(EntityPatterns::word_with_digit(), text),
        capitalized_words: find_all(EntityPatterns::capitalized(), text),
        all_caps_words: find_all(EntityPatterns::all_caps(), text),
        repeated_chars: TextPatterns::words(text)
            .filter(|word| has_doubled_alphanumeric(word))
            .map(str::to_string)
            .collect(),
    }
}

/// True when two identical ASCII letters or digits sit side by side.
fn has_doubled_alphanumeric(word: &str) -> bool {
    let mut prev: Option<char> = None;
    for ch in word.chars() {
        if ch.is_ascii_alphanumeric() && prev == Some(ch) {
            return true;
        }
        prev = Some(ch);
    }
    false
}
