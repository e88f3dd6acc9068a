//! Timestamp normalization for timestamp columns.
//!
//! Rows store timestamps as UTC RFC 3339 strings with millisecond precision,
//! so ordering the strings bytewise orders them chronologically in every
//! store.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::CoreError;

#[must_use]
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse any RFC 3339 timestamp and re-emit it in canonical UTC form.
pub fn normalize_timestamp(raw: &str) -> Result<String, CoreError> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim()).map_err(|source| {
        CoreError::InvalidTimestamp { value: raw.to_owned(), source }
    })?;
    Ok(format_timestamp(parsed.with_timezone(&Utc)))
}
