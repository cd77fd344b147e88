//! Stage (tahapan) model and its progress record.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{dates::lenient, Schedule, ScheduleStatus};

/// Progress record of a stage: the four schedule dates plus field notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Progress {
    /// Backend identifier of the progress record
    #[serde(rename = "idProgres", default)]
    pub id: Option<u64>,

    /// Raw backend status string; informational, never used to classify
    #[serde(default)]
    pub status: Option<String>,

    #[serde(rename = "planningTanggalMulai", default, with = "lenient")]
    pub planning_start: Option<Date>,

    #[serde(rename = "planningTanggalSelesai", default, with = "lenient")]
    pub planning_end: Option<Date>,

    #[serde(rename = "aktualTanggalMulai", default, with = "lenient")]
    pub actual_start: Option<Date>,

    #[serde(rename = "aktualTanggalSelesai", default, with = "lenient")]
    pub actual_end: Option<Date>,

    /// Free-text note entered with the actual dates
    #[serde(rename = "keterangan", default)]
    pub note: Option<String>,

    /// References to supporting documents
    #[serde(rename = "dokumenBukti", default)]
    pub documents: Vec<String>,
}

impl Progress {
    /// The four schedule dates as a standalone value.
    pub fn schedule(&self) -> Schedule {
        Schedule {
            planning_start: self.planning_start,
            planning_end: self.planning_end,
            actual_start: self.actual_start,
            actual_end: self.actual_end,
        }
    }
}

/// One step of a procurement workflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    #[serde(rename = "idTahapan")]
    pub id: u64,

    /// Position of the stage within its procurement (1-based)
    #[serde(rename = "noUrut", default)]
    pub order: u32,

    #[serde(rename = "namaTahapan")]
    pub name: String,

    /// Standard duration of the stage in days, when the workflow defines one
    #[serde(rename = "standarWaktuHari", default)]
    pub standard_days: Option<u32>,

    #[serde(rename = "isWaktuEditable", default)]
    pub duration_editable: bool,

    /// Weight of the stage in the procurement's overall progress
    #[serde(rename = "bobot", default)]
    pub weight: f64,

    #[serde(rename = "progres", default)]
    pub progress: Progress,
}

impl Stage {
    pub fn schedule(&self) -> Schedule {
        self.progress.schedule()
    }

    /// Schedule adherence of this stage as of `today`.
    pub fn status(&self, today: Date) -> ScheduleStatus {
        self.schedule().status(today)
    }
}
