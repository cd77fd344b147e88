//! Mapping stage dates onto grid columns.

use jiff::civil::Date;
use serde::Serialize;

use super::Column;
use crate::models::{Schedule, ScheduleStatus};

/// Column a date falls in: the last column starting on or before `date`.
///
/// `None` means "no position" (the date is unset, or there are no columns).
/// Dates past the last column's start clamp to the last column, and dates
/// before the first column land on the first.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use pantau_core::{
///     locale::Locale,
///     timeline::{column_index, generate_columns, DateRange},
/// };
///
/// let range = DateRange { start: date(2024, 3, 1), end: date(2024, 3, 31) };
/// let columns = generate_columns(range, Locale::Indonesian);
/// assert_eq!(column_index(&columns, Some(date(2024, 3, 1))), Some(0));
/// assert_eq!(column_index(&columns, Some(date(2024, 3, 10))), Some(1));
/// assert_eq!(column_index(&columns, None), None);
/// ```
pub fn column_index(columns: &[Column], date: Option<Date>) -> Option<usize> {
    let date = date?;
    if columns.is_empty() {
        return None;
    }
    // TODO: dates after the range end still clamp to the last column; decide
    // whether they should report no position instead.
    let index = columns
        .windows(2)
        .position(|pair| date < pair[1].start)
        .unwrap_or(columns.len() - 1);
    Some(index)
}

/// A rendered bar: `span` columns starting at column `start`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Bar {
    pub start: usize,
    pub span: usize,
}

impl Bar {
    /// Bar from the column of `start` to the column of `end`, inclusive.
    ///
    /// `None` (nothing rendered) unless both dates are set and the end column
    /// is not before the start column.
    pub fn between(columns: &[Column], start: Option<Date>, end: Option<Date>) -> Option<Bar> {
        let start = column_index(columns, start)?;
        let end = column_index(columns, end)?;
        (end >= start).then(|| Bar {
            start,
            span: end - start + 1,
        })
    }

    /// Last column covered by the bar, `None` for a zero-width bar.
    pub fn end(&self) -> Option<usize> {
        self.span.checked_sub(1).map(|last| self.start + last)
    }
}

/// What a single grid cell of a stage row shows.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CellKind {
    Empty,
    PlanStart,
    PlanFill,
    ActualStart,
    ActualFill,
}

/// Where a stage's bars sit on the grid, and how it is doing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StagePlacement {
    pub planning: Option<Bar>,
    pub actual: Option<Bar>,
    pub status: ScheduleStatus,
}

impl StagePlacement {
    pub fn place(columns: &[Column], schedule: &Schedule, today: Date) -> Self {
        Self {
            planning: Bar::between(columns, schedule.planning_start, schedule.planning_end),
            actual: Bar::between(columns, schedule.actual_start, schedule.actual_end),
            status: schedule.status(today),
        }
    }

    /// Per-column layout of the row, `width` cells long.
    ///
    /// The planning bar is laid down first and the actual bar overwrites it
    /// where they overlap. Cells past `width` are dropped.
    pub fn cells(&self, width: usize) -> Vec<CellKind> {
        let mut cells = vec![CellKind::Empty; width];
        let mut lay = |bar: Option<Bar>, head: CellKind, fill: CellKind| {
            if let Some(bar) = bar {
                for index in bar.start..(bar.start + bar.span).min(width) {
                    cells[index] = if index == bar.start { head } else { fill };
                }
            }
        };
        lay(self.planning, CellKind::PlanStart, CellKind::PlanFill);
        lay(self.actual, CellKind::ActualStart, CellKind::ActualFill);
        cells
    }
}
