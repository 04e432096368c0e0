//! Decoder for the whitespace-delimited log syntax.

use crate::record::LogRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Positional pattern for one whitespace-delimited entry.
///
/// A decimal (optionally fractional) timestamp, a run of 3+ spaces left over
/// from column alignment, then nine single-space-separated columns. The
/// ninth column is `access_type/dest_ip` and is captured as two groups, so a
/// full match yields the 11 canonical fields directly.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s{3,}(\d+) (\S+) (\S+) (\d+) (\S+) (\S+) (\S+) (\S+)/(\S+) (\S+)")
        .expect("whitespace line pattern is valid")
});

/// Decode one whitespace-delimited line, or `None` if it does not match.
pub fn parse_whitespace_line(line: &str) -> Option<LogRecord> {
    let (_, fields) = LINE_PATTERN.captures(line)?.extract::<11>();
    Some(LogRecord::from_fields(fields.map(str::to_string)))
}
