//! Descriptive statistics over a block of text.

use serde::Serialize;

use super::split_lines;
use crate::domain::TextPatterns;
use crate::ordered::OrderedMap;

/// Aggregate statistics for one text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextStatistics {
    /// Characters (not bytes) in the whole text.
    pub total_chars: usize,
    pub total_words: usize,
    pub total_lines: usize,
    /// Mean word length rounded to two decimals; 0.0 without words.
    pub avg_word_length: f64,
    /// Case-folded most frequent word; the first one seen wins ties.
    pub most_common_word: Option<String>,
    /// Longest line; the first one wins ties.
    pub longest_line: Option<String>,
    /// Word count of each line, aligned with the lines of the text.
    pub words_per_line: Vec<usize>,
    pub capitalized_sentences: usize,
    pub questions: usize,
    pub exclamations: usize,
}

/// Computes [`TextStatistics`] for `text`.
pub fn analyze_text(text: &str) -> TextStatistics {
    let lines = split_lines(text);
    let words: Vec<&str> = TextPatterns::words(text).collect();

    let word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        round2(word_chars as f64 / words.len() as f64)
    };

    let mut stats = TextStatistics {
        total_chars: text.chars().count(),
        total_words: words.len(),
        total_lines: lines.len(),
        avg_word_length,
        most_common_word: most_common_word(&words),
        longest_line: longest_line(&lines).map(str::to_string),
        words_per_line: lines
            .iter()
            .map(|line| TextPatterns::words(line).count())
            .collect(),
        ..Default::default()
    };

    for sentence in TextPatterns::sentences(text) {
        if sentence.chars().next().is_some_and(char::is_uppercase) {
            stats.capitalized_sentences += 1;
        }
        if sentence.ends_with('?') {
            stats.questions += 1;
        }
        if sentence.ends_with('!') {
            stats.exclamations += 1;
        }
    }

    stats
}

/// Rounds to two decimals, sending exact ties to the even neighbour.
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let mut rounded = scaled.round();
    if (rounded - scaled).abs() == 0.5 && rounded % 2.0 != 0.0 {
        rounded -= scaled.signum();
    }
    rounded / 100.0
}

fn most_common_word(words: &[&str]) -> Option<String> {
    let mut counts: OrderedMap<usize> = OrderedMap::new();
    for word in words {
        let folded = word.to_lowercase();
        match counts.get_mut(&folded) {
            Some(count) => *count += 1,
            None => {
                counts.insert(folded, 1);
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (word, &count) in counts.iter() {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((word, count));
        }
    }
    best.map(|(word, _)| word.to_string())
}

fn longest_line<'a>(lines: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for &line in lines {
        let len = line.chars().count();
        if best.map_or(true, |(_, top)| len > top) {
            best = Some((line, len));
        }
    }
    best.map(|(line, _)| line)
}
