//! Phone number scanning and normalization.
//!
//! Strict whole-string validation lives in the format registry; this matcher
//! covers the looser jobs of finding dash-separated numbers inside running
//! text and reducing a raw phone field to its digits.

use super::PatternMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum digit count for a normalized number to count as valid.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Dash-separated phone number matcher.
///
/// Finds numbers shaped like `555-123-4567` anywhere in text.
#[derive(Debug, Clone)]
pub struct PhoneNumberMatcher;

impl PhoneNumberMatcher {
    /// Creates a new phone number matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\d{3}-\d{3}-\d{4}").expect("Valid phone number regex"));
        &PATTERN
    }

    fn non_digit() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("Valid regex"));
        &PATTERN
    }

    /// Strips everything but digits.
    pub fn digits(text: &str) -> String {
        Self::non_digit().replace_all(text, "").into_owned()
    }

    /// Returns true when `digits` holds enough digits for a full number.
    pub fn validate(digits: &str) -> bool {
        digits.chars().count() >= MIN_PHONE_DIGITS
    }
}

impl Default for PhoneNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for PhoneNumberMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn mask(&self) -> &str {
        "XXX-XXX-XXXX"
    }

    fn normalize(&self, text: &str) -> Option<String> {
        let digits = Self::digits(text);
        Self::validate(&digits).then_some(digits)
    }
}
