//! Ordered text-cleaning pipeline.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{EmailMatcher, PatternMatcher};
use crate::error::TextSiftError;

/// A single cleaning step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanOperation {
    Trim,
    Lowercase,
    RemovePunctuation,
    RemoveDigits,
    RemoveExtraSpaces,
    RemoveUrls,
    RemoveEmails,
    CapitalizeSentences,
}

impl CleanOperation {
    pub const ALL: [CleanOperation; 8] = [
        Self::Trim,
        Self::Lowercase,
        Self::RemovePunctuation,
        Self::RemoveDigits,
        Self::RemoveExtraSpaces,
        Self::RemoveUrls,
        Self::RemoveEmails,
        Self::CapitalizeSentences,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::Lowercase => "lowercase",
            Self::RemovePunctuation => "remove_punctuation",
            Self::RemoveDigits => "remove_digits",
            Self::RemoveExtraSpaces => "remove_extra_spaces",
            Self::RemoveUrls => "remove_urls",
            Self::RemoveEmails => "remove_emails",
            Self::CapitalizeSentences => "capitalize_sentences",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Trim => text.trim().to_string(),
            Self::Lowercase => text.to_lowercase(),
            Self::RemovePunctuation => CleanPatterns::punctuation().replace_all(text, "").into_owned(),
            Self::RemoveDigits => CleanPatterns::digits().replace_all(text, "").into_owned(),
            Self::RemoveExtraSpaces => CleanPatterns::whitespace()
                .replace_all(text, " ")
                .trim()
                .to_string(),
            Self::RemoveUrls => CleanPatterns::url().replace_all(text, "").into_owned(),
            Self::RemoveEmails => EmailMatcher::new()
                .pattern()
                .replace_all(text, "")
                .into_owned(),
            Self::CapitalizeSentences => capitalize_sentences(text),
        }
    }
}

impl fmt::Display for CleanOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CleanOperation {
    type Err = TextSiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| TextSiftError::UnknownOperation {
                name: s.to_string(),
            })
    }
}

struct CleanPatterns;

impl CleanPatterns {
    fn punctuation() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("Valid regex"));
        &PATTERN
    }

    fn digits() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("Valid regex"));
        &PATTERN
    }

    fn whitespace() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Valid regex"));
        &PATTERN
    }

    fn url() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"https?://\S+").expect("Valid URL regex"));
        &PATTERN
    }

    fn terminator() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").expect("Valid regex"));
        &PATTERN
    }
}

/// Splits on sentence terminators, drops empty pieces (and their
/// terminator), capitalizes each piece, and joins them with single spaces.
fn capitalize_sentences(text: &str) -> String {
    let mut pieces: Vec<(&str, &str)> = Vec::new();
    let mut last = 0;
    for m in CleanPatterns::terminator().find_iter(text) {
        pieces.push((&text[last..m.start()], m.as_str()));
        last = m.end();
    }
    pieces.push((&text[last..], ""));

    let sentences: Vec<String> = pieces
        .into_iter()
        .filter_map(|(body, punct)| {
            let body = body.trim();
            let mut chars = body.chars();
            let first = chars.next()?;
            Some(format!("{}{}{}", first.to_uppercase(), chars.as_str(), punct))
        })
        .collect();

    sentences.join(" ").trim().to_string()
}

/// Every stage of a cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineResult {
    pub original: String,
    pub cleaned: String,
    /// The original text followed by the output of each operation.
    pub steps: Vec<String>,
}

/// Applies `operations` to `text` in order, recording each intermediate.
pub fn clean_text(text: &str, operations: &[CleanOperation]) -> PipelineResult {
    let mut steps = Vec::with_capacity(operations.len() + 1);
    steps.push(text.to_string());

    let mut current = text.to_string();
    for op in operations {
        current = op.apply(&current);
        debug!(operation = %op, len = current.len(), "applied cleaning step");
        steps.push(current.clone());
    }

    PipelineResult {
        original: text.to_string(),
        cleaned: current,
        steps,
    }
}
