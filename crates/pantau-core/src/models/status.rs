//! Schedule status and the filters built on it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Schedule adherence of a stage.
///
/// Never stored: it is derived from the stage's dates and the evaluation
/// date every time it is needed (see [`crate::models::Schedule::status`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleStatus {
    /// Finished by the planned end, or still inside the planned window
    OnTime,

    /// Finished after the planned end, or the planned end has passed
    Late,

    /// No planned end and no actual start to judge against
    Undetermined,
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "on-time" | "ontime" | "on_time" | "aman" => Ok(ScheduleStatus::OnTime),
            "late" | "terlambat" => Ok(ScheduleStatus::Late),
            "undetermined" | "none" => Ok(ScheduleStatus::Undetermined),
            _ => Err(format!("Invalid schedule status: {s}")),
        }
    }
}

impl ScheduleStatus {
    /// Stable string representation used in JSON and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::OnTime => "on-time",
            ScheduleStatus::Late => "late",
            ScheduleStatus::Undetermined => "undetermined",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantau_core::models::ScheduleStatus;
    ///
    /// assert_eq!(ScheduleStatus::OnTime.with_icon(), "✓ On time");
    /// assert_eq!(ScheduleStatus::Late.with_icon(), "! Late");
    /// assert_eq!(ScheduleStatus::Undetermined.with_icon(), "○ Undetermined");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ScheduleStatus::OnTime => "✓ On time",
            ScheduleStatus::Late => "! Late",
            ScheduleStatus::Undetermined => "○ Undetermined",
        }
    }
}

/// Which stages a view keeps, by status.
///
/// Mirrors the dashboard's filter tabs; `semua` / `aman` / `terlambat` parse
/// alongside the English names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    /// Keep every stage
    #[default]
    All,
    OnTime,
    Late,
    Undetermined,
}

impl StatusFilter {
    /// Whether a stage with `status` passes this filter.
    pub fn matches(&self, status: ScheduleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::OnTime => status == ScheduleStatus::OnTime,
            StatusFilter::Late => status == ScheduleStatus::Late,
            StatusFilter::Undetermined => status == ScheduleStatus::Undetermined,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "semua" => Ok(StatusFilter::All),
            other => other
                .parse::<ScheduleStatus>()
                .map(StatusFilter::from)
                .map_err(|_| format!("Invalid status filter: {s}")),
        }
    }
}

impl From<ScheduleStatus> for StatusFilter {
    fn from(status: ScheduleStatus) -> Self {
        match status {
            ScheduleStatus::OnTime => StatusFilter::OnTime,
            ScheduleStatus::Late => StatusFilter::Late,
            ScheduleStatus::Undetermined => StatusFilter::Undetermined,
        }
    }
}
