//! Rule-based substitution and censoring.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use serde::Deserialize;

use crate::domain::{EmailMatcher, PatternMatcher, PhoneNumberMatcher};
use crate::error::{TextSiftError, TextSiftResult};

const NUMBER_WORDS: [(&str, &str); 10] = [
    ("1", "one"),
    ("2", "two"),
    ("3", "three"),
    ("4", "four"),
    ("5", "five"),
    ("6", "six"),
    ("7", "seven"),
    ("8", "eight"),
    ("9", "nine"),
    ("10", "ten"),
];

/// A whole-word, case-insensitive replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contraction {
    pub from: String,
    pub to: String,
}

impl Contraction {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Which substitutions [`smart_replace`] performs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ReplaceOptions {
    pub censor_phone: bool,
    pub censor_email: bool,
    pub fix_spacing: bool,
    /// Applied in list order.
    pub contractions: Vec<Contraction>,
    pub number_to_word: bool,
}

struct SpacingPatterns;

impl SpacingPatterns {
    fn punctuation() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\s*([,.!?])\s*").expect("Valid regex"));
        &PATTERN
    }

    fn whitespace() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Valid regex"));
        &PATTERN
    }

    fn numbers() -> &'static [(Regex, &'static str)] {
        static PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
            NUMBER_WORDS
                .iter()
                .map(|(digits, word)| {
                    let pattern = format!(r"\b{digits}\b");
                    (Regex::new(&pattern).expect("Valid number regex"), *word)
                })
                .collect()
        });
        &PATTERNS
    }
}

fn whole_word(word: &str) -> TextSiftResult<Regex> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    Regex::new(&pattern).map_err(|e| TextSiftError::PatternError {
        pattern,
        reason: e.to_string(),
    })
}

/// Applies the enabled substitutions in a fixed order: phone censoring,
/// email censoring, spacing repair, contraction expansion, number words.
pub fn smart_replace(text: &str, options: &ReplaceOptions) -> TextSiftResult<String> {
    let mut s = text.to_string();

    if options.censor_phone {
        s = PhoneNumberMatcher::new().censor(&s);
    }

    if options.censor_email {
        s = EmailMatcher::new().censor(&s);
    }

    if options.fix_spacing {
        let spaced = SpacingPatterns::punctuation()
            .replace_all(&s, "$1 ")
            .into_owned();
        let collapsed = SpacingPatterns::whitespace().replace_all(&spaced, " ");
        s = collapsed.trim().to_string();
    }

    for contraction in &options.contractions {
        let pattern = whole_word(&contraction.from)?;
        s = pattern
            .replace_all(&s, NoExpand(contraction.to.as_str()))
            .into_owned();
    }

    if options.number_to_word {
        for (pattern, word) in SpacingPatterns::numbers() {
            s = pattern.replace_all(&s, NoExpand(*word)).into_owned();
        }
    }

    Ok(s)
}
