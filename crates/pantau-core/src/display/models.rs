//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it; the same text
//! reads fine as plain output.

use std::fmt;

use super::{budget::Budget, datetime::DatePair};
use crate::models::{Program, ScheduleStatus, StageRow, StatusFilter, StatusSummary};

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::OnTime => write!(f, "on-time"),
            StatusFilter::Late => write!(f, "late"),
            StatusFilter::Undetermined => write!(f, "undetermined"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let priority = if self.priority { " ★" } else { "" };
        writeln!(f, "# {}{priority}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- Agency: {}", self.agency_name().unwrap_or("-"))?;
        let kinds = self.kinds();
        if !kinds.is_empty() {
            writeln!(f, "- Procurement: {kinds}")?;
        }
        if let Some(budget) = &self.budget {
            writeln!(f, "- Budget: Rp {}", Budget(budget))?;
        }
        if !self.slug.is_empty() {
            writeln!(f, "- Slug: {}", self.slug)?;
        }
        if !self.documents.is_empty() {
            writeln!(f, "- Documents: {}", self.documents.len())?;
        }

        Ok(())
    }
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Status")?;
        writeln!(f)?;
        writeln!(f, "- Procurements: {}", self.procurements)?;
        writeln!(f, "- Stages: {}", self.total)?;
        writeln!(f, "- {}: {}", ScheduleStatus::OnTime.with_icon(), self.on_time)?;
        writeln!(f, "- {}: {}", ScheduleStatus::Late.with_icon(), self.late)?;
        writeln!(
            f,
            "- {}: {}",
            ScheduleStatus::Undetermined.with_icon(),
            self.undetermined
        )?;
        Ok(())
    }
}

impl fmt::Display for StageRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.order,
            self.stage,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Procurement: {}", self.procurement)?;
        writeln!(
            f,
            "- Planning: {}",
            DatePair(self.planning_start, self.planning_end)
        )?;
        writeln!(f, "- Actual: {}", DatePair(self.actual_start, self.actual_end))?;
        if !self.note.is_empty() {
            writeln!(f, "- Note: {}", self.note)?;
        }
        if !self.documents.is_empty() {
            writeln!(f, "- Documents: {}", self.documents.join(", "))?;
        }
        writeln!(f)?;
        Ok(())
    }
}
