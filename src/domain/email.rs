//! Email address scanning and normalization.

use super::{validate_format, PatternMatcher};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `user@domain.tld` addresses embedded in text.
#[derive(Debug, Clone, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("Valid email regex"));
        &PATTERN
    }

    /// Trims, lower-cases, and drops every space.
    pub fn clean(text: &str) -> String {
        text.trim().to_lowercase().replace(' ', "")
    }
}

impl PatternMatcher for EmailMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn mask(&self) -> &str {
        "[EMAIL]"
    }

    fn normalize(&self, text: &str) -> Option<String> {
        let cleaned = Self::clean(text);
        validate_format(&cleaned, "email").matched.then_some(cleaned)
    }
}
