//! Date-range discovery: the whole months a timeline has to cover.

use jiff::{civil::Date, ToSpan};
use serde::Serialize;

use crate::models::Schedule;

/// Inclusive calendar range, always whole months: `start` is the first of a
/// month and `end` the last day of a month.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Range covering every date set in `schedules`, widened to whole months.
    ///
    /// With no dates at all the range falls back to `today` through the 28th
    /// of the month three months later.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use pantau_core::{models::Schedule, timeline::DateRange};
    ///
    /// let schedule = Schedule {
    ///     planning_start: Some(date(2024, 1, 17)),
    ///     actual_end: Some(date(2024, 3, 2)),
    ///     ..Default::default()
    /// };
    /// let range = DateRange::discover([schedule], date(2030, 1, 1));
    /// assert_eq!(range.start, date(2024, 1, 1));
    /// assert_eq!(range.end, date(2024, 3, 31));
    /// ```
    pub fn discover<I>(schedules: I, today: Date) -> Self
    where
        I: IntoIterator<Item = Schedule>,
    {
        let bounds = schedules
            .into_iter()
            .flat_map(|schedule| schedule.dates())
            .fold(None, |bounds: Option<(Date, Date)>, date| match bounds {
                None => Some((date, date)),
                Some((min, max)) => Some((min.min(date), max.max(date))),
            });

        let (min, max) = bounds.unwrap_or_else(|| Self::default_window(today));

        Self {
            start: min.first_of_month(),
            end: max.last_of_month(),
        }
    }

    /// `today` through day 28 of the month three months ahead.
    fn default_window(today: Date) -> (Date, Date) {
        let horizon = today
            .first_of_month()
            .saturating_add(3.months())
            .saturating_add(27.days());
        (today, horizon)
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn planned(start: Date, end: Date) -> Schedule {
        Schedule {
            planning_start: Some(start),
            planning_end: Some(end),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_falls_back_to_three_month_window() {
        let range = DateRange::discover(Vec::<Schedule>::new(), date(2024, 3, 20));
        assert_eq!(range.start, date(2024, 3, 1));
        assert_eq!(range.end, date(2024, 6, 30));
    }

    #[test]
    fn test_schedules_without_dates_use_fallback() {
        let range = DateRange::discover([Schedule::default()], date(2024, 11, 5));
        assert_eq!(range.start, date(2024, 11, 1));
        assert_eq!(range.end, date(2025, 2, 28));
    }

    #[test]
    fn test_single_date_is_one_month() {
        let schedule = Schedule {
            actual_start: Some(date(2024, 2, 14)),
            ..Default::default()
        };
        let range = DateRange::discover([schedule], date(2030, 1, 1));
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
    }

    #[test]
    fn test_spans_all_date_kinds() {
        let early = planned(date(2024, 4, 3), date(2024, 4, 30));
        let late_actual = Schedule {
            actual_start: Some(date(2024, 3, 28)),
            actual_end: Some(date(2024, 7, 2)),
            ..Default::default()
        };
        let range = DateRange::discover([early, late_actual], date(2000, 1, 1));
        assert_eq!(range.start, date(2024, 3, 1));
        assert_eq!(range.end, date(2024, 7, 31));
        assert!(range.contains(date(2024, 7, 31)));
        assert!(!range.contains(date(2024, 8, 1)));
    }

    #[test]
    fn test_today_is_ignored_when_dates_exist() {
        let range = DateRange::discover(
            [planned(date(2024, 1, 10), date(2024, 1, 20))],
            date(2026, 10, 16),
        );
        assert_eq!(range.end, date(2024, 1, 31));
    }
}
