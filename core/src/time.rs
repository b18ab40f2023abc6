//! Time related utils.

use crate::Error;
use crate::Result;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with a numeric offset and no colon: "2020-04-21T18:23:37+0000"
pub fn format_iso8601_numeric_offset(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%z").to_string()
}

/// Parse time from ISO 8601 with a numeric offset: "2020-04-21T18:23:37+0000"
///
/// The parsed time is converted into UTC.
pub fn parse_iso8601_numeric_offset(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z")
        .map_err(|e| Error::request_invalid(format!("invalid timestamp {s:?}")).with_source(e))?;

    Ok(t.with_timezone(&Utc))
}
