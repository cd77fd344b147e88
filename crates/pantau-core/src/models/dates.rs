//! Lenient calendar-date parsing for backend payloads.
//!
//! The backend sends stage dates in several shapes (plain dates, civil
//! datetimes, RFC 3339 timestamps) and sometimes garbage. A date that cannot
//! be read is treated as unset rather than failing the whole snapshot.

use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PantauError, Result};

/// Parse a calendar date from any of the shapes the backend emits.
///
/// Timestamps carrying an offset are converted to their UTC calendar date,
/// which is also what the dashboard shows when it cuts the string at `T`.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use pantau_core::models::dates::parse_date;
///
/// assert_eq!(parse_date("2024-03-10"), Some(date(2024, 3, 10)));
/// assert_eq!(parse_date("2024-03-10T00:00:00.000Z"), Some(date(2024, 3, 10)));
/// assert_eq!(parse_date("2024-03-10T23:15:00"), Some(date(2024, 3, 10)));
/// assert_eq!(parse_date("soon"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Some(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(dt) = raw.parse::<DateTime>() {
        return Some(dt.date());
    }
    raw.parse::<Date>().ok()
}

/// Strict variant used for user-supplied dates such as `--today`.
pub fn parse_date_arg(field: &str, raw: &str) -> Result<Date> {
    parse_date(raw).ok_or_else(|| {
        PantauError::invalid_input(field).with_reason(format!(
            "'{raw}' is not a date, expected YYYY-MM-DD"
        ))
    })
}

/// Serde adapter for `Option<Date>` fields that degrades unreadable values
/// to `None`.
pub mod lenient {
    use super::*;

    pub fn serialize<S>(value: &Option<Date>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| {
            let parsed = parse_date(&raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                warn!("Ignoring unreadable date '{raw}'");
            }
            parsed
        }))
    }
}
