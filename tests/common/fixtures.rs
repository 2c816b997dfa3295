//! Test fixtures and log builders.

use std::fmt::Write as _;

/// Three lines, four sentences, one question, two exclamations.
pub const SAMPLE_TEXT: &str = "Hello World!\nThis is a test. How many words are here?\nPython is great!";

/// Mixed business text with one of every entity class.
pub const INFO_TEXT: &str = r#"In 2023, revenue was $1,200.50 (up 10%). "Growth was amazing!" said the CEO. What next?"#;

/// Text exercising every token class of the pattern finder.
pub const PATTERN_TEXT: &str = "The price is 45.67 dollars, ID A123, CODE ABC, SHOUT WOW, year 2025!!";

/// Four valid log lines with one ERROR.
pub const SAMPLE_LOG: &str = "[2025-09-28 14:05:23] INFO: System started
[2025-09-28 14:06:10] ERROR: Disk not found
[2025-09-28 15:15:45] WARNING: Low memory
[2025-09-29 09:00:00] INFO: User login";

/// Builder for synthetic logs mixing valid and malformed lines.
///
/// # Example
///
/// ```ignore
/// let log = TestLogBuilder::new()
///     .with_entry("2025-01-01", "10:00:00", "INFO", "started")
///     .with_noise("garbage")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TestLogBuilder {
    lines: Vec<String>,
    valid: usize,
    invalid: usize,
}

impl TestLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a well-formed `[date time] LEVEL: message` line.
    pub fn with_entry(mut self, date: &str, time: &str, level: &str, message: &str) -> Self {
        let mut line = String::new();
        write!(line, "[{date} {time}] {level}: {message}").expect("write to String");
        self.lines.push(line);
        self.valid += 1;
        self
    }

    /// Adds a line that does not fit the log grammar.
    pub fn with_noise(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self.invalid += 1;
        self
    }

    pub fn valid_count(&self) -> usize {
        self.valid
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid
    }

    pub fn build(&self) -> String {
        self.lines.join("\n")
    }
}
