//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around an optional calendar date that renders unset dates as
/// `-`.
///
/// # Format
///
/// Set dates follow the pattern `YYYY-MM-DD`, zero-padded.
pub struct OptionalDate(pub Option<Date>);

impl fmt::Display for OptionalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d")),
            None => write!(f, "-"),
        }
    }
}

/// A start/end pair, e.g. `2024-01-01 → 2024-01-15`.
pub struct DatePair(pub Option<Date>, pub Option<Date>);

impl fmt::Display for DatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", OptionalDate(self.0), OptionalDate(self.1))
    }
}
