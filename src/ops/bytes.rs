//! Byte-volume aggregation.

use crate::ops::{OpValue, Operation};
use crate::record::LogRecord;

/// Running sum of response header and body sizes.
///
/// Both byte fields must parse for a record to contribute; if either fails,
/// the record adds nothing at all. There is no partial add of the field
/// that did parse.
#[derive(Clone, Debug, Default)]
pub struct TotalBytes {
    total: u64,
}

impl Operation for TotalBytes {
    fn handle(&mut self, record: &LogRecord) {
        let (Ok(header), Ok(body)) = (
            record.header_bytes.parse::<u64>(),
            record.body_bytes.parse::<u64>(),
        ) else {
            return;
        };
        self.total += header + body;
    }

    fn result(&self) -> (&'static str, OpValue) {
        ("total amount of bytes exchanged", OpValue::Int(self.total))
    }
}
