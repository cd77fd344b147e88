use jiff::civil::Date;
use pantau_core::models::{Procurement, Progress, Stage};

/// Dates of one stage, in planning start, planning end, actual start,
/// actual end order.
pub type Dates = (Option<Date>, Option<Date>, Option<Date>, Option<Date>);

/// Helper function to create a stage with the given dates
pub fn create_stage(id: u64, name: &str, dates: Dates) -> Stage {
    let (planning_start, planning_end, actual_start, actual_end) = dates;
    Stage {
        id,
        order: u32::try_from(id).unwrap_or(u32::MAX),
        name: name.to_string(),
        standard_days: None,
        duration_editable: false,
        weight: 0.0,
        progress: Progress {
            planning_start,
            planning_end,
            actual_start,
            actual_end,
            ..Default::default()
        },
    }
}

/// Helper function to wrap stages into a procurement
pub fn create_procurement(id: u64, name: &str, stages: Vec<Stage>) -> Procurement {
    Procurement {
        id,
        transaction_name: name.to_string(),
        kind: "Tender".to_string(),
        stages,
    }
}
