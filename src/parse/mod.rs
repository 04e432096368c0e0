//! Line classification and record normalization.
//!
//! Access logs arrive in two fixed syntaxes:
//!
//! - **Whitespace-delimited** -- columns separated by spaces, no embedded
//!   spaces inside a column (see [`whitespace`]).
//! - **CSV** -- ten comma-separated fields where the URL may be quoted to
//!   protect embedded commas (see [`csv`]).
//!
//! [`parse_line`] is the single seam between raw text and the aggregation
//! layer: it classifies a line, delegates to the matching decoder, and
//! returns `None` for anything that is blank or malformed. It never fails --
//! a bad line is simply not a record.

mod csv;
mod whitespace;

pub use self::csv::parse_csv_line;
pub use self::whitespace::parse_whitespace_line;

use crate::record::LogRecord;

/// Syntax classification of one raw line.
///
/// Lines are expected with their terminator already stripped
/// (`BufRead::lines` semantics).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only; never a record.
    Blank,
    /// Whitespace-delimited columns.
    Whitespace,
    /// Comma-separated fields, quote-aware.
    Csv,
}

/// Classify a raw line by syntax.
///
/// Columns in the whitespace syntax contain no embedded spaces, and CSV
/// lines carry no whitespace outside quoted fields, so the presence of any
/// whitespace character is a reliable discriminator between the two.
pub fn classify(line: &str) -> LineKind {
    if line.chars().all(char::is_whitespace) {
        LineKind::Blank
    } else if line.chars().any(char::is_whitespace) {
        LineKind::Whitespace
    } else {
        LineKind::Csv
    }
}

/// Normalize one raw line into a [`LogRecord`].
///
/// Blank lines and lines that fail to decode under their classified syntax
/// yield `None`. This function never panics and never returns an error; all
/// malformed input is absorbed here.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    match classify(line) {
        LineKind::Blank => None,
        LineKind::Whitespace => parse_whitespace_line(line),
        LineKind::Csv => parse_csv_line(line),
    }
}
