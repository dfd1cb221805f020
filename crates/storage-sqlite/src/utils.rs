//! Shared helpers for DB model conversions.

use chrono::{DateTime, Utc};

/// Parses an RFC 3339 timestamp stored as TEXT.
///
/// Timestamps are written by this crate and should always parse; a corrupt
/// value is logged and replaced with the current time rather than failing
/// the whole read.
pub(crate) fn parse_rfc3339(value: &str, field_name: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|e| {
            log::error!("Failed to parse {} '{}': {}", field_name, value, e);
            Utc::now()
        })
}
