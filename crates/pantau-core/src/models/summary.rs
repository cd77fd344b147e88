//! Program-wide status counts and flat stage rows.

use jiff::civil::Date;
use serde::Serialize;

use super::{Procurement, Program, ScheduleStatus, Stage};

/// Status counts across all stages of a program.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct StatusSummary {
    /// Number of procurement groups
    pub procurements: u32,
    /// Total number of stages
    pub total: u32,
    pub on_time: u32,
    pub late: u32,
    pub undetermined: u32,
}

impl StatusSummary {
    /// Count every stage of `program` as of `today`.
    pub fn tally(program: &Program, today: Date) -> Self {
        let mut summary = Self {
            procurements: u32::try_from(program.procurements.len()).unwrap_or(u32::MAX),
            ..Default::default()
        };
        for stage in program.stages() {
            summary.record(stage.status(today));
        }
        summary
    }

    fn record(&mut self, status: ScheduleStatus) {
        self.total += 1;
        match status {
            ScheduleStatus::OnTime => self.on_time += 1,
            ScheduleStatus::Late => self.late += 1,
            ScheduleStatus::Undetermined => self.undetermined += 1,
        }
    }
}

/// One stage flattened with its program and procurement context, in the
/// column order of the dashboard's timeline export.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StageRow {
    pub program: String,
    pub agency: String,
    pub procurement: String,
    pub stage_id: u64,
    pub order: u32,
    pub stage: String,
    pub planning_start: Option<Date>,
    pub planning_end: Option<Date>,
    pub actual_start: Option<Date>,
    pub actual_end: Option<Date>,
    pub status: ScheduleStatus,
    pub note: String,
    /// Evidence documents attached to the stage's progress
    pub documents: Vec<String>,
}

impl StageRow {
    pub fn new(program: &Program, procurement: &Procurement, stage: &Stage, today: Date) -> Self {
        let schedule = stage.schedule();
        Self {
            program: program.name.clone(),
            agency: program.agency_name().unwrap_or_default().to_string(),
            procurement: procurement.transaction_name.clone(),
            stage_id: stage.id,
            order: stage.order,
            stage: stage.name.clone(),
            planning_start: schedule.planning_start,
            planning_end: schedule.planning_end,
            actual_start: schedule.actual_start,
            actual_end: schedule.actual_end,
            status: schedule.status(today),
            note: stage.progress.note.clone().unwrap_or_default(),
            documents: stage.progress.documents.clone(),
        }
    }
}
