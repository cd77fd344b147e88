//! Display formatting for monitoring views.
//!
//! Domain models implement [`std::fmt::Display`] directly; collections and
//! the timeline grid get their own wrappers or impls here. Everything renders
//! as markdown so the CLI can style it, and the timeline grid is a fenced
//! `text` block so its columns survive any markdown renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │ (Program, Row,  │───▶│ wrapper types   │───▶│    Output       │
//! │  TimelineGrid)  │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (StageRows)
//! - [`datetime`]: Optional date formatting
//! - [`budget`]: Compact rupiah amounts
//! - [`models`]: Display implementations for domain models
//! - [`timeline`]: Text grid for [`crate::timeline::TimelineGrid`]
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use pantau_core::display::{Budget, DatePair};
//!
//! assert_eq!(Budget("250000000").to_string(), "250 Jt");
//! assert_eq!(
//!     DatePair(Some(date(2024, 1, 1)), None).to_string(),
//!     "2024-01-01 → -"
//! );
//! ```

pub mod budget;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod timeline;

// Re-export commonly used types for convenience
pub use budget::Budget;
pub use collections::StageRows;
pub use datetime::{DatePair, OptionalDate};
