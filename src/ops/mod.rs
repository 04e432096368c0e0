//! Streaming aggregation operations over normalized log records.
//!
//! An [`Operation`] is a stateful accumulator fed one [`LogRecord`] at a
//! time. The built-in set is closed:
//!
//! - [`EventsPerSecond`] -- event rate over the observed timestamp span.
//! - [`TotalBytes`] -- running sum of header and body byte counts.
//! - [`MostFrequentIp`] / [`LeastFrequentIp`] -- client-IP frequency
//!   extremes, ties resolved to the IP seen earliest in the stream.
//!
//! Operations own their state for the whole run: the driver constructs each
//! selected variant once, feeds it every record from every source, and reads
//! its result exactly once at the end. `handle` never fails -- a field that
//! does not coerce to a number makes that record a no-op for the affected
//! operation, nothing more.

mod bytes;
mod frequency;
mod throughput;

pub use bytes::TotalBytes;
pub use frequency::{LeastFrequentIp, MostFrequentIp};
pub use throughput::EventsPerSecond;

use crate::record::LogRecord;
use serde::Serialize;

/// A stateful streaming aggregator.
pub trait Operation: Send {
    /// Consume one record, updating accumulator state.
    ///
    /// Must not fail: records whose fields do not coerce for this operation
    /// are silently skipped.
    fn handle(&mut self, record: &LogRecord);

    /// Read the final result as a `(display name, value)` pair.
    ///
    /// Pure and idempotent; safe to call on an accumulator that never saw a
    /// record.
    fn result(&self) -> (&'static str, OpValue);
}

/// Final value reported by an operation.
///
/// Kept as a small enum so integer sums stay integers in the JSON report
/// while rates render as floats.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OpValue {
    /// Integer result, e.g. a byte total.
    Int(u64),
    /// Floating-point result, e.g. a rate.
    Float(f64),
    /// Textual result, e.g. an IP address.
    Text(String),
}

/// The closed set of selectable operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    MostFrequentIp,
    LeastFrequentIp,
    EventsPerSecond,
    TotalBytes,
}

impl OpKind {
    /// Every selectable kind, in canonical order.
    pub const ALL: [OpKind; 4] = [
        OpKind::MostFrequentIp,
        OpKind::LeastFrequentIp,
        OpKind::EventsPerSecond,
        OpKind::TotalBytes,
    ];

    /// Construct a fresh accumulator for this kind.
    pub fn build(self) -> Box<dyn Operation> {
        match self {
            OpKind::MostFrequentIp => Box::new(MostFrequentIp::default()),
            OpKind::LeastFrequentIp => Box::new(LeastFrequentIp::default()),
            OpKind::EventsPerSecond => Box::new(EventsPerSecond::default()),
            OpKind::TotalBytes => Box::new(TotalBytes::default()),
        }
    }
}

/// Construct one accumulator per selected kind, in selection order.
pub fn build_operations(kinds: &[OpKind]) -> Vec<Box<dyn Operation>> {
    kinds.iter().map(|kind| kind.build()).collect()
}
