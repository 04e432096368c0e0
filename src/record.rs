//! The canonical access-log record produced by the parsing layer.

/// Number of fields in a [`LogRecord`].
pub const FIELD_COUNT: usize = 11;

/// One normalized access-log entry.
///
/// Both input syntaxes (whitespace-delimited and CSV) decode into this one
/// shape, so every downstream aggregation consumes a single record type.
/// All fields are kept as raw strings; numeric interpretation (and tolerance
/// of values that fail to parse) is the responsibility of each aggregation.
///
/// Field order matches the column order of the whitespace syntax:
///
/// | # | field          | example                |
/// |---|----------------|------------------------|
/// | 0 | `timestamp`    | `1035368418.577`       |
/// | 1 | `header_bytes` | `776`                  |
/// | 2 | `client_ip`    | `210.8.79.228`         |
/// | 3 | `result_code`  | `TCP_MISS/200`         |
/// | 4 | `body_bytes`   | `4797`                 |
/// | 5 | `method`       | `GET`                  |
/// | 6 | `url`          | `http://example.com/`  |
/// | 7 | `user`         | `-`                    |
/// | 8 | `access_type`  | `DIRECT`               |
/// | 9 | `dest_ip`      | `64.14.118.196`        |
/// | 10| `mime_type`    | `text/html`            |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    /// Request timestamp in decimal seconds, optionally fractional.
    pub timestamp: String,
    /// Response header size in bytes.
    pub header_bytes: String,
    /// Client IP address.
    pub client_ip: String,
    /// Cache-result/HTTP-status pair.
    pub result_code: String,
    /// Response body size in bytes.
    pub body_bytes: String,
    /// HTTP verb.
    pub method: String,
    /// Request target.
    pub url: String,
    /// RFC931 ident column, usually `-`.
    pub user: String,
    /// Hierarchy/peering decision.
    pub access_type: String,
    /// Destination host or IP address.
    pub dest_ip: String,
    /// Response MIME type.
    pub mime_type: String,
}

impl LogRecord {
    /// Build a record from the 11 canonical fields in positional order.
    pub fn from_fields(fields: [String; FIELD_COUNT]) -> Self {
        let [
            timestamp,
            header_bytes,
            client_ip,
            result_code,
            body_bytes,
            method,
            url,
            user,
            access_type,
            dest_ip,
            mime_type,
        ] = fields;
        Self {
            timestamp,
            header_bytes,
            client_ip,
            result_code,
            body_bytes,
            method,
            url,
            user,
            access_type,
            dest_ip,
            mime_type,
        }
    }
}
