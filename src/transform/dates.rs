use chrono::{DateTime, NaiveDate, Utc};

use crate::{EtlError, Res};

/// Parses an album release date whose precision varies by album.
///
/// Tries `YYYY-MM-DD`, then `YYYY-MM`, then `YYYY`, in that order. Missing
/// parts default to the first month or day. Anything else is an
/// [`EtlError::InvalidDate`].
pub fn parse_release_date(value: &str) -> Res<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01-01"), "%Y-%m-%d"))
        .map_err(|_| EtlError::InvalidDate {
            field: "release_date",
            value: value.to_string(),
        })
}

/// Parses the `added_at` timestamp of a playlist item. No fallback.
pub fn parse_added_at(value: &str) -> Res<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| EtlError::InvalidDate {
            field: "added_at",
            value: value.to_string(),
        })
}
