//! Core library for the Pantau procurement monitoring tool.
//!
//! This crate turns a program snapshot from the monitoring backend into the
//! views the dashboard shows: a week-bucketed timeline grid, per-stage
//! schedule status, and program-wide counts.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): Program, procurement and stage data as
//!   the backend sends it, plus status classification
//! - **Timeline** ([`timeline`]): Date range discovery, weekly columns, and
//!   bar placement
//! - **Display** ([`display`]): Markdown formatting of every view
//! - **Monitor** ([`monitor`]): Loads a snapshot and answers view queries
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pantau_core::{params::TimelineQuery, MonitorBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let monitor = MonitorBuilder::new()
//!     .with_snapshot_path(Some("program.json"))
//!     .build()?;
//!
//! println!("{}", monitor.program());
//! println!("{}", monitor.summary());
//! println!("{}", monitor.timeline(&TimelineQuery::default()));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod locale;
pub mod models;
pub mod monitor;
pub mod params;
pub mod timeline;

// Re-export commonly used types
pub use display::{Budget, DatePair, OptionalDate, StageRows};
pub use error::{PantauError, Result};
pub use locale::Locale;
pub use models::{
    Procurement, ProcurementMethod, Program, Schedule, ScheduleStatus, Snapshot, Stage, StageRow,
    StatusFilter, StatusSummary,
};
pub use monitor::{Monitor, MonitorBuilder};
pub use params::TimelineQuery;
pub use timeline::{DateRange, TimelineGrid};
