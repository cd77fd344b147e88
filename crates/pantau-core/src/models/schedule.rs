//! The four-date schedule of a stage and its status classification.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ScheduleStatus;

/// Planned and actual date pairs of a stage. Any subset may be unset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub planning_start: Option<Date>,
    pub planning_end: Option<Date>,
    pub actual_start: Option<Date>,
    pub actual_end: Option<Date>,
}

impl Schedule {
    /// Every date that is set, in planning-start, planning-end,
    /// actual-start, actual-end order.
    pub fn dates(self) -> impl Iterator<Item = Date> {
        [
            self.planning_start,
            self.planning_end,
            self.actual_start,
            self.actual_end,
        ]
        .into_iter()
        .flatten()
    }

    /// Classify schedule adherence as of `today`.
    ///
    /// Pure in `(self, today)`: the same stage can move from on-time to late
    /// between two calls only because `today` moved past its planned end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use pantau_core::models::{Schedule, ScheduleStatus};
    ///
    /// let schedule = Schedule {
    ///     planning_end: Some(date(2024, 3, 10)),
    ///     ..Default::default()
    /// };
    /// assert_eq!(schedule.status(date(2024, 3, 15)), ScheduleStatus::Late);
    /// assert_eq!(schedule.status(date(2024, 3, 1)), ScheduleStatus::OnTime);
    /// ```
    pub fn status(&self, today: Date) -> ScheduleStatus {
        let past_deadline = |deadline: Date| {
            if today > deadline {
                ScheduleStatus::Late
            } else {
                ScheduleStatus::OnTime
            }
        };

        match (self.actual_start, self.actual_end, self.planning_end) {
            (Some(_), Some(finished), Some(deadline)) => {
                if finished <= deadline {
                    ScheduleStatus::OnTime
                } else {
                    ScheduleStatus::Late
                }
            }
            (Some(_), None, Some(deadline)) => past_deadline(deadline),
            (Some(_), _, None) => ScheduleStatus::OnTime,
            (None, _, Some(deadline)) => past_deadline(deadline),
            (None, _, None) => ScheduleStatus::Undetermined,
        }
    }
}
