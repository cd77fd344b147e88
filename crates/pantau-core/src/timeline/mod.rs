//! Timeline grid builder.
//!
//! Turns procurement stages into a week-bucketed Gantt grid:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  DateRange   │    │   Columns    │    │  Placement   │    │   Status     │
//! │  (discover)  │───▶│ (7-day steps)│───▶│ (bar spans)  │───▶│ (per stage)  │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Every step is a pure function of the stages it is given plus the
//! evaluation date. Nothing is cached: a grid is rebuilt for every view, so
//! statuses can never go stale when the date crosses a deadline.
//!
//! ## Submodules
//!
//! - [`range`]: whole-month date range covering every stage date
//! - [`columns`]: weekly columns and month header groups
//! - [`placement`]: date to column mapping, bars, and row cells
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use pantau_core::{
//!     locale::Locale,
//!     models::{Procurement, Progress, ScheduleStatus, Stage},
//!     timeline::TimelineGrid,
//! };
//!
//! let stage = Stage {
//!     id: 1,
//!     order: 1,
//!     name: "Pengumuman".to_string(),
//!     standard_days: None,
//!     duration_editable: false,
//!     weight: 0.0,
//!     progress: Progress {
//!         planning_start: Some(date(2024, 1, 3)),
//!         planning_end: Some(date(2024, 1, 15)),
//!         ..Default::default()
//!     },
//! };
//! let procurement = Procurement {
//!     id: 1,
//!     transaction_name: "Konstruksi".to_string(),
//!     kind: "Tender".to_string(),
//!     stages: vec![stage],
//! };
//!
//! let grid = TimelineGrid::build(&[procurement], date(2024, 1, 20), Locale::Indonesian);
//! assert_eq!(grid.width(), 5);
//! let row = grid.rows().next().unwrap();
//! assert_eq!(row.placement.planning.map(|bar| bar.span), Some(3));
//! assert_eq!(row.placement.status, ScheduleStatus::Late);
//! ```

use jiff::civil::Date;
use log::debug;
use serde::Serialize;

pub mod columns;
pub mod placement;
pub mod range;

pub use columns::{generate_columns, group_by_month, week_of_month, Column, MonthGroup};
pub use placement::{column_index, Bar, CellKind, StagePlacement};
pub use range::DateRange;

use crate::{
    locale::Locale,
    models::{Procurement, Schedule, Stage},
};

/// One stage row of the grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineRow {
    pub stage_id: u64,
    pub order: u32,
    pub name: String,
    pub schedule: Schedule,
    pub placement: StagePlacement,
}

impl TimelineRow {
    fn new(stage: &Stage, columns: &[Column], today: Date) -> Self {
        let schedule = stage.schedule();
        Self {
            stage_id: stage.id,
            order: stage.order,
            name: stage.name.clone(),
            placement: StagePlacement::place(columns, &schedule, today),
            schedule,
        }
    }
}

/// Rows of one procurement, shown under its transaction name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineSection {
    pub procurement_id: u64,
    pub transaction_name: String,
    pub rows: Vec<TimelineRow>,
}

/// A fully laid out timeline: header columns plus one row per stage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineGrid {
    pub today: Date,
    pub range: DateRange,
    pub columns: Vec<Column>,
    pub months: Vec<MonthGroup>,
    pub sections: Vec<TimelineSection>,
}

impl TimelineGrid {
    /// Run the whole pipeline over exactly the given procurements.
    pub fn build(procurements: &[Procurement], today: Date, locale: Locale) -> Self {
        let range = DateRange::discover(
            procurements
                .iter()
                .flat_map(|p| p.stages.iter())
                .map(Stage::schedule),
            today,
        );
        let columns = generate_columns(range, locale);
        let months = group_by_month(&columns);

        let sections: Vec<TimelineSection> = procurements
            .iter()
            .map(|procurement| TimelineSection {
                procurement_id: procurement.id,
                transaction_name: procurement.transaction_name.clone(),
                rows: procurement
                    .stages
                    .iter()
                    .map(|stage| TimelineRow::new(stage, &columns, today))
                    .collect(),
            })
            .collect();

        debug!(
            "Built timeline {}..{}: {} columns, {} sections",
            range.start,
            range.end,
            columns.len(),
            sections.len()
        );

        Self {
            today,
            range,
            columns,
            months,
            sections,
        }
    }

    /// Number of columns, i.e. the width of every row.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Every row of every section, in display order.
    pub fn rows(&self) -> impl Iterator<Item = &TimelineRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
