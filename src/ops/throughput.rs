//! Event-rate aggregation.

use crate::ops::{OpValue, Operation};
use crate::record::LogRecord;

/// Events per second over the observed timestamp span.
///
/// Tracks the running minimum and maximum of the timestamp field plus a
/// count of records whose timestamp parsed. The rate is
/// `count / (max - min)`, with the divisor replaced by 1 whenever the span
/// is not positive: zero valid events, a single event, or a stream where
/// every timestamp is identical. The degenerate cases therefore report
/// `count` itself rather than dividing by zero.
#[derive(Clone, Debug)]
pub struct EventsPerSecond {
    first: f64,
    last: f64,
    events: u64,
}

impl Default for EventsPerSecond {
    fn default() -> Self {
        Self {
            first: f64::INFINITY,
            last: 0.0,
            events: 0,
        }
    }
}

impl Operation for EventsPerSecond {
    fn handle(&mut self, record: &LogRecord) {
        let Ok(timestamp) = record.timestamp.parse::<f64>() else {
            return;
        };
        self.events += 1;
        self.last = self.last.max(timestamp);
        self.first = self.first.min(timestamp);
    }

    fn result(&self) -> (&'static str, OpValue) {
        let span = self.last - self.first;
        let divisor = if span > 0.0 { span } else { 1.0 };
        ("events per second", OpValue::Float(self.events as f64 / divisor))
    }
}
