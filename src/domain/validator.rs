//! Whole-string validation against a registered format.

use serde::Serialize;
use tracing::debug;

use super::registry::{registry, FormatSpec};
use crate::ordered::OrderedMap;

/// Outcome of validating one string against one format.
///
/// `fields` only holds groups that took part in the match, keyed by their
/// canonical names, in grammar order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    pub matched: bool,
    pub fields: OrderedMap<String>,
}

impl ValidationResult {
    /// A failed validation with no fields.
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl FormatSpec {
    /// Matches `input` against the full grammar and decomposes it.
    pub fn validate(&self, input: &str) -> ValidationResult {
        let Some(caps) = self.pattern().captures(input) else {
            return ValidationResult::no_match();
        };

        let mut fields = OrderedMap::new();
        for group in self.pattern().capture_names().flatten() {
            // Groups from the branch that did not match are absent, not empty.
            if let Some(m) = caps.name(group) {
                let field = self.canonical_field(group);
                if !fields.contains_key(field) {
                    fields.insert(field, m.as_str().to_string());
                }
            }
        }

        ValidationResult {
            matched: true,
            fields,
        }
    }
}

/// Validates `input` against the format registered under `format_name`.
///
/// Unknown format names produce a non-matching result rather than an error.
pub fn validate_format(input: &str, format_name: &str) -> ValidationResult {
    match registry().lookup(format_name) {
        Some(spec) => spec.validate(input),
        None => {
            debug!(format = format_name, "unknown format name");
            ValidationResult::no_match()
        }
    }
}
