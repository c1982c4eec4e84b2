//! Line parser for `.env` files.
//!
//! The format is deliberately small: one `KEY=value` assignment per line,
//! `#` comment lines and blank lines allowed. Anything else is dropped
//! without an error, so parsing is a total function over its input.

use serde::Serialize;

use crate::env_map::EnvMap;

/// What happened to each line of the input.
///
/// Purely informational: the mapping is the result, the report only feeds
/// logging and the `parse` command's summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Assignments applied to the mapping, including overwrites.
    pub assignments: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    /// Lines with no `=` at all.
    pub missing_separator: usize,
    /// Lines like `=value` whose key trims to nothing.
    pub empty_keys: usize,
    /// Assignments that replaced an earlier value for the same key.
    pub overwritten: usize,
}

impl ParseReport {
    /// Total number of lines that contributed nothing to the mapping.
    pub fn skipped(&self) -> usize {
        self.blank_lines + self.comment_lines + self.missing_separator + self.empty_keys
    }
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    MissingSeparator,
    EmptyKey,
    Assignment { key: &'a str, value: &'a str },
}

/// Parse env file text into an ordered mapping.
pub fn parse(text: &str) -> EnvMap {
    parse_with_report(text).0
}

/// Parse env file text, also returning per-line accounting.
pub fn parse_with_report(text: &str) -> (EnvMap, ParseReport) {
    let mut env = EnvMap::new();
    let mut report = ParseReport::default();

    // `lines` splits on both `\n` and `\r\n`.
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        match classify(raw) {
            Line::Blank => report.blank_lines += 1,
            Line::Comment => report.comment_lines += 1,
            Line::MissingSeparator => {
                tracing::trace!(line = line_no, "skipping line without '='");
                report.missing_separator += 1;
            }
            Line::EmptyKey => {
                tracing::trace!(line = line_no, "skipping assignment with empty key");
                report.empty_keys += 1;
            }
            Line::Assignment { key, value } => {
                report.assignments += 1;
                if env.insert(key, value).is_some() {
                    tracing::trace!(line = line_no, key, "overwriting earlier definition");
                    report.overwritten += 1;
                }
            }
        }
    }

    tracing::debug!(
        entries = env.len(),
        skipped = report.skipped(),
        overwritten = report.overwritten,
        "parsed env text"
    );

    (env, report)
}

fn classify(raw: &str) -> Line<'_> {
    let line = trim(raw);
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment;
    }
    let Some((key, value)) = line.split_once('=') else {
        return Line::MissingSeparator;
    };
    let key = trim(key);
    if key.is_empty() {
        return Line::EmptyKey;
    }
    Line::Assignment {
        key,
        value: trim(value),
    }
}

/// Trim the ECMAScript whitespace set: Unicode `White_Space` minus NEL
/// (U+0085), plus the byte-order mark.
fn trim(s: &str) -> &str {
    s.trim_matches(is_trim_whitespace)
}

fn is_trim_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}
