//! Pattern grammars and format validation.
//!
//! This module holds every regular expression the crate relies on: the
//! closed registry of named formats, the validator that decomposes a string
//! into named fields, and the scanning matchers shared by the
//! transformation utilities.

pub mod email;
pub mod phone;
pub mod registry;
pub mod validator;

pub use email::EmailMatcher;
pub use phone::PhoneNumberMatcher;
pub use registry::{registry, FormatKind, FormatRegistry, FormatSpec};
pub use validator::{validate_format, ValidationResult};

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Trait for scanning matchers that find, normalize, and mask one kind of
/// token inside free text.
pub trait PatternMatcher: Send + Sync {
    fn pattern(&self) -> &Regex;

    /// Replacement written over every match by [`PatternMatcher::censor`].
    fn mask(&self) -> &str;

    fn normalize(&self, text: &str) -> Option<String>;

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    fn censor(&self, text: &str) -> String {
        self.pattern()
            .replace_all(text, NoExpand(self.mask()))
            .into_owned()
    }
}

/// Tokenizing patterns shared by the extractor and the statistics analyzer.
pub struct TextPatterns;

impl TextPatterns {
    /// A maximal run of word characters.
    pub fn word() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("Valid regex pattern"));
        &PATTERN
    }

    /// A run of non-terminators closed by `.`, `!` or `?`. Spans lines.
    pub fn sentence() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[^.!?]+[.!?]").expect("Valid regex pattern"));
        &PATTERN
    }

    /// Iterates over sentences trimmed of surrounding whitespace.
    pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
        Self::sentence().find_iter(text).map(|m| m.as_str().trim())
    }

    /// Iterates over word tokens.
    pub fn words(text: &str) -> impl Iterator<Item = &str> {
        Self::word().find_iter(text).map(|m| m.as_str())
    }
}
