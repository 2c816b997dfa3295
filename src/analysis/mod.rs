//! Free-text analysis: entity extraction, descriptive statistics, and log
//! summarization.
//!
//! Every function here is a pure, total scan over its input. Empty or
//! unmatched input degrades to empty results, never to an error.

pub mod extract;
pub mod log;
pub mod stats;

pub use extract::{extract_entities, find_patterns, ExtractedEntities, FoundPatterns};
pub use log::{parse_log, LogRecord, LogReport, LogSummary, TimeRange};
pub use stats::{analyze_text, TextStatistics};

/// Splits text on every line-break sequence a text editor would recognize.
///
/// `\r\n` counts as one break, and a break at the very end does not start an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
