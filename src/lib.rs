//! Pattern-driven text validation, extraction, and analysis.
//!
//! This library validates strings against a closed set of named formats,
//! pulls entities out of free text, computes descriptive statistics, and
//! summarizes line-structured logs. Every grammar is a compiled regular
//! expression shared process-wide, and every core operation is a pure,
//! total function of its input.
//!
//! # Architecture
//!
//! - [`domain`]: Format registry, whole-string validation, and shared matchers
//! - [`analysis`]: Entity extraction, text statistics, and log parsing
//! - [`transform`]: Receipt layout, record normalization, cleaning, substitution
//! - [`config`]: TOML configuration for the command-line tool
//! - [`error`]: Error handling for the fallible edges
//!
//! # Quick Start
//!
//! ```
//! use textsift::validate_format;
//!
//! let result = validate_format("(123) 456-7890", "phone");
//! assert!(result.matched);
//! assert_eq!(result.field("area_code"), Some("123"));
//!
//! assert!(!validate_format("not-an-email", "email").matched);
//! ```
//!
//! # Examples
//!
//! ## Extract Entities
//!
//! ```
//! use textsift::extract_entities;
//!
//! let found = extract_entities(r#"In 2023 revenue rose 10% to $1,200. What next? "Great!" said the CEO."#);
//! assert_eq!(found.years, vec!["2023"]);
//! assert_eq!(found.percentages, vec!["10%"]);
//! assert_eq!(found.quoted_text, vec!["Great!"]);
//! assert_eq!(found.questions, vec!["What next?"]);
//! ```
//!
//! ## Summarize a Log
//!
//! ```
//! use textsift::parse_log;
//!
//! let report = parse_log("[2025-09-28 14:06:10] ERROR: Disk not found\nnoise");
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.summary.error_messages, vec!["Disk not found"]);
//! ```

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod ordered;
pub mod transform;

pub use analysis::{
    analyze_text, extract_entities, find_patterns, parse_log, ExtractedEntities, FoundPatterns,
    LogRecord, LogReport, LogSummary, TextStatistics, TimeRange,
};
pub use config::Config;
pub use domain::{
    registry, validate_format, EmailMatcher, FormatKind, FormatSpec, PatternMatcher,
    PhoneNumberMatcher, ValidationResult,
};
pub use error::{TextSiftError, TextSiftResult};
pub use ordered::OrderedMap;
pub use transform::{
    clean_text, format_receipt, normalize_user, smart_replace, CleanOperation, Contraction,
    PipelineResult, RawUserData, ReceiptLine, ReplaceOptions, UserRecord,
};
