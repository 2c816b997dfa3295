//! Parsing and summarizing `[date time] LEVEL: message` logs.
//!
//! Each physical line is matched on its own. Lines outside the grammar are
//! skipped without producing a record or an error.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::ordered::OrderedMap;

/// Level whose messages are collected into [`LogSummary::error_messages`].
pub const ERROR_LEVEL: &str = "ERROR";

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM:SS`
    pub time: String,
    pub level: String,
    pub message: String,
}

impl LogRecord {
    fn pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(concat!(
                r"^\[(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})\s+(?P<time>[0-9]{2}:[0-9]{2}:[0-9]{2})\]",
                r"\s+(?P<level>\w+):\s*(?P<message>.*)$",
            ))
            .expect("Valid log line regex")
        });
        &PATTERN
    }

    /// Parses a single line, or returns `None` if it does not fit the grammar.
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = Self::pattern().captures(line)?;
        Some(Self {
            date: caps.name("date")?.as_str().to_string(),
            time: caps.name("time")?.as_str().to_string(),
            level: caps.name("level")?.as_str().to_string(),
            message: caps.name("message")?.as_str().to_string(),
        })
    }

    /// Two-digit hour bucket of the timestamp.
    pub fn hour(&self) -> &str {
        self.time.get(..2).unwrap_or(&self.time)
    }

    pub fn is_error(&self) -> bool {
        self.level == ERROR_LEVEL
    }
}

/// Earliest and latest record time.
///
/// Times are fixed-width and zero-padded, so string order is time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Aggregates over every parsed record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LogSummary {
    pub total_entries: usize,
    /// Record count per level, in first-seen order.
    pub level_counts: OrderedMap<usize>,
    /// Distinct dates, ascending.
    pub unique_dates: Vec<String>,
    /// Messages of `ERROR` records in input order.
    pub error_messages: Vec<String>,
    pub time_range: Option<TimeRange>,
    /// Hour with the most records; the first hour seen wins ties.
    pub most_active_hour: Option<String>,
}

impl LogSummary {
    pub fn from_records(records: &[LogRecord]) -> Self {
        let mut level_counts: OrderedMap<usize> = OrderedMap::new();
        let mut hour_counts: OrderedMap<usize> = OrderedMap::new();
        let mut dates = BTreeSet::new();
        let mut error_messages = Vec::new();
        let mut time_range: Option<TimeRange> = None;

        for record in records {
            bump(&mut level_counts, &record.level);
            bump(&mut hour_counts, record.hour());
            dates.insert(record.date.clone());

            if record.is_error() {
                error_messages.push(record.message.clone());
            }

            match time_range.as_mut() {
                Some(range) => {
                    if record.time < range.start {
                        range.start = record.time.clone();
                    }
                    if record.time > range.end {
                        range.end = record.time.clone();
                    }
                }
                None => {
                    time_range = Some(TimeRange {
                        start: record.time.clone(),
                        end: record.time.clone(),
                    });
                }
            }
        }

        let mut most_active_hour: Option<(&str, usize)> = None;
        for (hour, &count) in hour_counts.iter() {
            if most_active_hour.map_or(true, |(_, top)| count > top) {
                most_active_hour = Some((hour, count));
            }
        }

        Self {
            total_entries: records.len(),
            level_counts,
            unique_dates: dates.into_iter().collect(),
            error_messages,
            time_range,
            most_active_hour: most_active_hour.map(|(hour, _)| hour.to_string()),
        }
    }

    pub fn count_for(&self, level: &str) -> usize {
        self.level_counts.get(level).copied().unwrap_or(0)
    }
}

fn bump(counts: &mut OrderedMap<usize>, key: &str) {
    match counts.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            counts.insert(key, 1);
        }
    }
}

/// Parsed records together with their summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LogReport {
    pub records: Vec<LogRecord>,
    pub summary: LogSummary,
}

/// Parses every well-formed line of `log_text` and summarizes the result.
pub fn parse_log(log_text: &str) -> LogReport {
    let mut records = Vec::new();
    for (idx, line) in log_text.lines().enumerate() {
        match LogRecord::parse_line(line) {
            Some(record) => records.push(record),
            None => trace!(line = idx + 1, "skipping line outside log grammar"),
        }
    }

    let summary = LogSummary::from_records(&records);
    LogReport { records, summary }
}
