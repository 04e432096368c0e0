//! Decoder for the CSV log syntax.

use crate::record::LogRecord;

/// Raw field count of one CSV entry, before the compound field is split.
const CSV_FIELD_COUNT: usize = 10;

/// Index of the compound `access_type/dest_ip` field in the raw CSV layout.
const COMPOUND_FIELD: usize = 8;

/// Decode one CSV line, or `None` if it is malformed.
///
/// The line is read as a single CSV record with quoting honored, so a quoted
/// URL may carry literal commas and still count as one field:
///
/// ```text
/// 1035368418.577,776,210.8.79.228,TCP_MISS/200,4797,GET,"http://www.usnews.com/we/Archives/1272003260@Top1,Bottom1,Left1?",-,DIRECT/64.14.118.196,application/x-javascript
/// ```
///
/// The record must have exactly ten fields, and the ninth must be an
/// `access_type/dest_ip` pair with a single `/` separator; splitting it
/// yields the same 11 canonical fields as the whitespace syntax.
pub fn parse_csv_line(line: &str) -> Option<LogRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let record = reader.records().next()?.ok()?;
    if record.len() != CSV_FIELD_COUNT {
        return None;
    }

    let mut compound = record[COMPOUND_FIELD].split('/');
    let access_type = compound.next()?;
    let dest_ip = compound.next()?;
    if compound.next().is_some() {
        return None;
    }

    Some(LogRecord {
        timestamp: record[0].to_string(),
        header_bytes: record[1].to_string(),
        client_ip: record[2].to_string(),
        result_code: record[3].to_string(),
        body_bytes: record[4].to_string(),
        method: record[5].to_string(),
        url: record[6].to_string(),
        user: record[7].to_string(),
        access_type: access_type.to_string(),
        dest_ip: dest_ip.to_string(),
        mime_type: record[9].to_string(),
    })
}
