//! The closed set of named string formats.
//!
//! Each format is a fully anchored grammar with named capture groups. When a
//! grammar offers alternative shapes (the two phone layouts), each shape
//! carries its own group names and an alias table folds them back onto one
//! canonical field set.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Identifier of a built-in format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Phone,
    Date,
    Time,
    Email,
    Url,
    Ssn,
}

impl FormatKind {
    pub const ALL: [FormatKind; 6] = [
        Self::Phone,
        Self::Date,
        Self::Time,
        Self::Email,
        Self::Url,
        Self::Ssn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Url => "url",
            Self::Ssn => "ssn",
        }
    }

    /// Resolves an exact (case-sensitive) format name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    fn grammar(&self) -> &'static str {
        match self {
            Self::Phone => concat!(
                r"^(?:\((?P<area>\d{3})\)\s*(?P<prefix>\d{3})-(?P<line>\d{4})",
                r"|(?P<area2>\d{3})-(?P<prefix2>\d{3})-(?P<line2>\d{4}))$",
            ),
            Self::Date => concat!(
                r"^(?P<month>0[1-9]|1[0-2])/(?P<day>0[1-9]|[12][0-9]|3[01])",
                r"/(?P<year>(?:19|20)\d{2})$",
            ),
            // The hour alternatives overlap (24-hour and 12-hour shapes) and
            // are not cross-checked against the marker: "13:00 PM" passes.
            Self::Time => concat!(
                r"^(?P<hour>0[0-9]|1[0-9]|2[0-3]|0[1-9]|1[0-2]):(?P<minute>[0-5][0-9])",
                r"(?:\s*(?P<ampm>(?i:AM|PM)))?$",
            ),
            Self::Email => r"^(?P<user>[\w.-]+)@(?P<domain>[\w.-]+\.\w+)$",
            Self::Url => r"^(?P<proto>https?)://(?P<host>[\w.-]+(?:\.[\w.-]+)+)(?P<path>/.*)?$",
            Self::Ssn => r"^(?P<part1>\d{3})-(?P<part2>\d{2})-(?P<part3>\d{4})$",
        }
    }

    fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Phone => &[
                ("area", "area_code"),
                ("area2", "area_code"),
                ("prefix2", "prefix"),
                ("line2", "line"),
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled format grammar.
#[derive(Debug)]
pub struct FormatSpec {
    kind: FormatKind,
    pattern: Regex,
    aliases: &'static [(&'static str, &'static str)],
}

impl FormatSpec {
    fn compile(kind: FormatKind) -> Self {
        Self {
            kind,
            pattern: Regex::new(kind.grammar()).expect("Valid format regex"),
            aliases: kind.aliases(),
        }
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Maps a raw capture-group name onto the field name reported to callers.
    pub fn canonical_field<'a>(&self, group: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(raw, _)| *raw == group)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(group)
    }

    /// Canonical field names in grammar order, without duplicates.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for group in self.pattern.capture_names().flatten() {
            let field = self.canonical_field(group);
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}

/// Read-only table of every built-in format, initialized once per process.
#[derive(Debug)]
pub struct FormatRegistry {
    specs: Vec<FormatSpec>,
}

impl FormatRegistry {
    fn builtin() -> Self {
        Self {
            specs: FormatKind::ALL.into_iter().map(FormatSpec::compile).collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&FormatSpec> {
        FormatKind::from_name(name).map(|kind| self.get(kind))
    }

    pub fn get(&self, kind: FormatKind) -> &FormatSpec {
        self.specs
            .iter()
            .find(|spec| spec.kind == kind)
            .expect("Every format kind is registered")
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(FormatSpec::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormatSpec> {
        self.specs.iter()
    }
}

/// Returns the process-wide format registry.
pub fn registry() -> &'static FormatRegistry {
    static REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::builtin);
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_formats_registered() {
        let names: Vec<&str> = registry().names().collect();
        assert_eq!(names, vec!["phone", "date", "time", "email", "url", "ssn"]);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(registry().lookup("ssn").is_some());
        assert!(registry().lookup("SSN").is_none());
        assert!(registry().lookup("zip").is_none());
    }

    #[test]
    fn test_phone_fields_are_canonical() {
        let spec = registry().get(FormatKind::Phone);
        assert_eq!(spec.fields(), vec!["area_code", "prefix", "line"]);
    }

    #[test]
    fn test_grammar_is_anchored() {
        let spec = registry().get(FormatKind::Ssn);
        assert!(spec.pattern().is_match("123-45-6789"));
        assert!(!spec.pattern().is_match("x123-45-6789"));
        assert!(!spec.pattern().is_match("123-45-67890"));
    }
}
