//! # logsift
//!
//! A **streaming analyzer for proxy access logs**. Logsift parses log files
//! in two fixed line syntaxes (whitespace-delimited and quote-aware CSV)
//! into one canonical record shape, then feeds every record to a set of
//! independent streaming aggregations and reports their combined results as
//! a single JSON object.
//!
//! ## Key Features
//!
//! - **Dual-syntax parsing** - whitespace-delimited and CSV lines mix
//!   freely, even inside one file
//! - **Streaming aggregation** - records are dispatched and dropped, never
//!   buffered; input size is bounded only by disk
//! - **Best-effort ingestion** - blank lines, malformed lines, and
//!   unreadable files are skipped, never fatal
//! - **Built-in operations** - event rate, byte totals, client-IP frequency
//!   extremes
//! - **Transparent decompression** - gzip and zstd sources, by extension or
//!   magic bytes (optional via feature flags)
//! - **Sequential and parallel execution** - drain files one at a time or
//!   concurrently (feature `parallel`)
//!
//! ## Quick Start
//!
//! ```ignore
//! use logsift::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! // Select aggregations and build their accumulators
//! let kinds = [OpKind::EventsPerSecond, OpKind::TotalBytes];
//! let mut ops = build_operations(&kinds);
//!
//! // Expand inputs (files, directories, glob patterns) and drain them
//! let files = expand_inputs(&["logs/".into(), "archive/*.gz".into()]);
//! let runner = Runner::default();
//! runner.run(&files, &mut ops);
//!
//! // Merge per-operation results into one JSON report
//! let results = merge_results(&ops);
//! println!("{}", render_json(&results)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Canonical record
//!
//! Both syntaxes normalize into [`LogRecord`], an 11-field tuple of raw
//! strings. [`parse_line`] is the only seam between raw text and the
//! aggregation layer; it classifies, decodes, and absorbs malformed input
//! as `None` without ever failing.
//!
//! ### Operations
//!
//! An [`Operation`] is a stateful accumulator with two methods: `handle`
//! consumes one record (and silently ignores fields that fail numeric
//! coercion), `result` reads the final `(name, value)` pair. The selectable
//! set is closed -- see [`OpKind`].
//!
//! ### Runner
//!
//! The [`Runner`] broadcasts every record from every source to every
//! selected operation, then the report module merges the results. In
//! parallel mode whole files are processed concurrently with each
//! accumulator behind a mutex; results are identical to sequential runs.

pub mod cli;
pub mod logging;
pub mod ops;
pub mod parse;
pub mod record;
pub mod report;
pub mod runner;
pub mod source;

// Re-export the primary API at the crate root
pub use cli::{Cli, RunConfig, StartupError};
pub use ops::{
    EventsPerSecond, LeastFrequentIp, MostFrequentIp, OpKind, OpValue, Operation, TotalBytes,
    build_operations,
};
pub use parse::{LineKind, classify, parse_line};
pub use record::LogRecord;
pub use report::{merge_results, render_json, write_report};
pub use runner::{ExecMode, RunStats, Runner};
pub use source::expand_inputs;
