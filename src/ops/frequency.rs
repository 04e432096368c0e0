//! Client-IP frequency aggregations.

use crate::ops::{OpValue, Operation};
use crate::record::LogRecord;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Occurrence counts per client IP.
///
/// Each entry remembers the order in which its IP first appeared, so the
/// frequency extremes can resolve ties in favor of the IP seen earliest in
/// the input stream.
///
/// Both frequency operations embed their own tally even though they consume
/// identical input. The duplication is deliberate: operations stay fully
/// independent and composable, with no shared accumulator state between
/// instances.
#[derive(Clone, Debug, Default)]
struct IpTally {
    counts: HashMap<String, IpCount>,
}

#[derive(Clone, Debug)]
struct IpCount {
    hits: u64,
    /// Arrival rank of the first occurrence; unique per IP.
    rank: usize,
}

impl IpTally {
    fn record(&mut self, ip: &str) {
        let rank = self.counts.len();
        self.counts
            .entry(ip.to_string())
            .and_modify(|count| count.hits += 1)
            .or_insert(IpCount { hits: 1, rank });
    }

    /// IP with the highest count; earliest-seen wins ties.
    fn most_frequent(&self) -> Option<&str> {
        self.counts
            .iter()
            .max_by_key(|(_, count)| (count.hits, Reverse(count.rank)))
            .map(|(ip, _)| ip.as_str())
    }

    /// IP with the lowest count; earliest-seen wins ties.
    fn least_frequent(&self) -> Option<&str> {
        self.counts
            .iter()
            .min_by_key(|(_, count)| (count.hits, count.rank))
            .map(|(ip, _)| ip.as_str())
    }
}

/// Most frequently seen client IP address.
///
/// Reports the empty string when the input held no records.
#[derive(Clone, Debug, Default)]
pub struct MostFrequentIp {
    tally: IpTally,
}

impl Operation for MostFrequentIp {
    fn handle(&mut self, record: &LogRecord) {
        self.tally.record(&record.client_ip);
    }

    fn result(&self) -> (&'static str, OpValue) {
        let ip = self.tally.most_frequent().unwrap_or_default();
        ("most frequent ip", OpValue::Text(ip.to_string()))
    }
}

/// Least frequently seen client IP address.
///
/// Reports the empty string when the input held no records.
#[derive(Clone, Debug, Default)]
pub struct LeastFrequentIp {
    tally: IpTally,
}

impl Operation for LeastFrequentIp {
    fn handle(&mut self, record: &LogRecord) {
        self.tally.record(&record.client_ip);
    }

    fn result(&self) -> (&'static str, OpValue) {
        let ip = self.tally.least_frequent().unwrap_or_default();
        ("least frequent ip", OpValue::Text(ip.to_string()))
    }
}
