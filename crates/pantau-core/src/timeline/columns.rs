//! Weekly column generation and month header grouping.

use jiff::{civil::Date, ToSpan};
use serde::Serialize;

use super::DateRange;
use crate::locale::Locale;

/// One week-sized bucket of the timeline grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Column {
    /// Header text, e.g. `M2`
    pub label: String,

    /// Week-of-month bucket, 1 to 4
    pub week: u8,

    /// Calendar month of `start` (1-12)
    pub month: i8,

    pub month_name: &'static str,

    pub year: i16,

    /// First day of the bucket
    pub start: Date,
}

/// Consecutive columns sharing one month and year, for the top header row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthGroup {
    pub month_name: &'static str,
    pub month: i8,
    pub year: i16,

    /// Number of columns under this header
    pub span: usize,
}

/// Week-of-month bucket of a day: 1-7, 8-14, 15-21, then 22 to month end.
///
/// Always four buckets per month, so the last one is not a true week.
pub fn week_of_month(day: i8) -> u8 {
    match day {
        i8::MIN..=7 => 1,
        8..=14 => 2,
        15..=21 => 3,
        _ => 4,
    }
}

/// Step through `range` seven days at a time, one column per step.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use pantau_core::{locale::Locale, timeline::{generate_columns, DateRange}};
///
/// let range = DateRange { start: date(2024, 2, 1), end: date(2024, 2, 29) };
/// let columns = generate_columns(range, Locale::Indonesian);
/// let labels: Vec<_> = columns.iter().map(|c| c.label.as_str()).collect();
/// assert_eq!(labels, ["M1", "M2", "M3", "M4", "M4"]);
/// assert_eq!(columns[4].start, date(2024, 2, 29));
/// ```
pub fn generate_columns(range: DateRange, locale: Locale) -> Vec<Column> {
    range
        .start
        .series(7.days())
        .take_while(|cursor| *cursor <= range.end)
        .map(|cursor| {
            let week = week_of_month(cursor.day());
            Column {
                label: format!("{}{}", locale.week_prefix(), week),
                week,
                month: cursor.month(),
                month_name: locale.month_name(cursor.month()),
                year: cursor.year(),
                start: cursor,
            }
        })
        .collect()
}

/// Merge consecutive columns of the same month and year, in order.
pub fn group_by_month(columns: &[Column]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for column in columns {
        match groups.last_mut() {
            Some(last) if last.month == column.month && last.year == column.year => {
                last.span += 1;
            }
            _ => groups.push(MonthGroup {
                month_name: column.month_name,
                month: column.month,
                year: column.year,
                span: 1,
            }),
        }
    }
    groups
}
