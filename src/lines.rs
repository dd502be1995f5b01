//! Line handling shared by both converters.
//!
//! Input files are line oriented: blank lines and `#` comments are skipped,
//! every other line is a record whose fields are separated by `:`. There is
//! no escaping, so a field can never contain a colon.

use crate::stats::LineStats;

pub const COMMENT_MARKER: char = '#';
pub const FIELD_SEPARATOR: char = ':';

/// What a single input line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Data,
}

/// A record-bearing line together with its 1-based position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Only a `#` in the very first column marks a comment.
pub fn classify(line: &str) -> LineKind {
    if line.trim_start().is_empty() {
        LineKind::Blank
    } else if line.starts_with(COMMENT_MARKER) {
        LineKind::Comment
    } else {
        LineKind::Data
    }
}

/// Splits the whole input into its data lines, in file order, and tallies
/// what was skipped.
pub fn scan(content: &str) -> (Vec<DataLine<'_>>, LineStats) {
    let mut stats = LineStats::default();
    let mut data = Vec::new();

    for (index, text) in content.lines().enumerate() {
        let kind = classify(text);
        stats.record(kind);
        if kind == LineKind::Data {
            data.push(DataLine {
                number: index + 1,
                text,
            });
        }
    }

    (data, stats)
}

/// Splits a data line on `:` and trims each field.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).map(str::trim).collect()
}
