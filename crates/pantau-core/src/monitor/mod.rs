//! High-level monitoring API over one program snapshot.
//!
//! [`Monitor`] owns a loaded [`Program`] together with the evaluation date
//! and locale, and answers every view a front end needs:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ MonitorBuilder  │    │     Monitor     │    │  TimelineGrid,  │
//! │ (snapshot path, │───▶│ (program, today,│───▶│  StatusSummary, │
//! │  today, locale) │    │  locale)        │    │  StageRows      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Views are computed on every call from the immutable snapshot; the
//! monitor holds no derived state.
//!
//! # Examples
//!
//! ```rust,no_run
//! use jiff::civil::date;
//! use pantau_core::{params::TimelineQuery, MonitorBuilder, StatusFilter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let monitor = MonitorBuilder::new()
//!     .with_snapshot_path(Some("program.json"))
//!     .with_today(Some(date(2024, 3, 15)))
//!     .build()?;
//!
//! let late = TimelineQuery {
//!     status: StatusFilter::Late,
//!     ..Default::default()
//! };
//! let grid = monitor.timeline(&late);
//! println!("{} late stages", grid.rows().count());
//! # Ok(())
//! # }
//! ```

use jiff::civil::Date;

pub mod builder;

pub use builder::MonitorBuilder;

use crate::{
    display::StageRows,
    locale::Locale,
    models::{Program, StageRow, StatusSummary},
    params::TimelineQuery,
    timeline::TimelineGrid,
};

/// Main monitoring interface for one program snapshot.
#[derive(Debug, Clone)]
pub struct Monitor {
    program: Program,
    today: Date,
    locale: Locale,
}

impl Monitor {
    /// Creates a monitor over an already loaded program.
    pub fn new(program: Program, today: Date, locale: Locale) -> Self {
        Self {
            program,
            today,
            locale,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Evaluation date used for every status.
    pub fn today(&self) -> Date {
        self.today
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Timeline grid over the stages `query` keeps.
    ///
    /// The date range follows the filtered view, not the whole program.
    pub fn timeline(&self, query: &TimelineQuery) -> TimelineGrid {
        let procurements = query.apply(&self.program.procurements, self.today);
        TimelineGrid::build(&procurements, self.today, self.locale)
    }

    /// Status counts across the whole program, ignoring any filter.
    pub fn summary(&self) -> StatusSummary {
        StatusSummary::tally(&self.program, self.today)
    }

    /// Flat export-style rows for the stages `query` keeps.
    pub fn stage_rows(&self, query: &TimelineQuery) -> StageRows {
        let rows = query
            .apply(&self.program.procurements, self.today)
            .iter()
            .flat_map(|procurement| {
                procurement
                    .stages
                    .iter()
                    .map(move |stage| StageRow::new(&self.program, procurement, stage, self.today))
            })
            .collect();
        StageRows(rows)
    }
}

#[cfg(test)]
mod tests;
