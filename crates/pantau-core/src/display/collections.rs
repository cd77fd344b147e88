//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::StageRow;

/// Newtype wrapper for displaying flat stage rows.
///
/// Serializes as a plain JSON array, so the same value backs both the
/// markdown listing and `--json` output.
///
/// # Examples
///
/// ```rust
/// use pantau_core::{
///     display::StageRows,
///     models::{ScheduleStatus, StageRow},
/// };
///
/// let row = StageRow {
///     program: "Peningkatan Jalan".to_string(),
///     agency: "Dinas PUPR".to_string(),
///     procurement: "Paket 1".to_string(),
///     stage_id: 7,
///     order: 1,
///     stage: "Pengumuman".to_string(),
///     planning_start: None,
///     planning_end: None,
///     actual_start: None,
///     actual_end: None,
///     status: ScheduleStatus::Undetermined,
///     note: String::new(),
///     documents: vec![],
/// };
/// let rows = StageRows(vec![row]);
/// assert!(rows.to_string().contains("### 1. Pengumuman"));
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct StageRows(pub Vec<StageRow>);

impl StageRows {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of rows in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&StageRow> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StageRow> {
        self.0.iter()
    }
}

impl Index<usize> for StageRows {
    type Output = StageRow;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for StageRows {
    type Item = StageRow;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StageRows {
    type Item = &'a StageRow;
    type IntoIter = std::slice::Iter<'a, StageRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StageRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No stages found.");
        }

        let mut procurement: Option<&str> = None;
        for row in &self.0 {
            if procurement != Some(row.procurement.as_str()) {
                writeln!(f, "## {}", row.procurement)?;
                writeln!(f)?;
                procurement = Some(row.procurement.as_str());
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::ScheduleStatus;

    fn create_test_row(procurement: &str, order: u32, stage: &str) -> StageRow {
        StageRow {
            program: "Test Program".to_string(),
            agency: "Dinas Uji".to_string(),
            procurement: procurement.to_string(),
            stage_id: u64::from(order),
            order,
            stage: stage.to_string(),
            planning_start: Some(date(2024, 1, 1)),
            planning_end: Some(date(2024, 1, 15)),
            actual_start: Some(date(2024, 1, 2)),
            actual_end: None,
            status: ScheduleStatus::OnTime,
            note: String::new(),
            documents: vec![],
        }
    }

    #[test]
    fn test_stage_rows_display_empty() {
        let rows = StageRows(vec![]);
        assert_eq!(format!("{rows}"), "No stages found.\n");
    }

    #[test]
    fn test_stage_rows_grouped_by_procurement() {
        let rows = StageRows(vec![
            create_test_row("Paket A", 1, "Pengumuman"),
            create_test_row("Paket A", 2, "Evaluasi"),
            create_test_row("Paket B", 1, "Kontrak"),
        ]);
        let output = format!("{rows}");

        assert_eq!(output.matches("## Paket A").count(), 1);
        assert_eq!(output.matches("## Paket B").count(), 1);
        assert!(output.contains("### 2. Evaluasi (✓ On time)"));
        assert!(output.contains("- Planning: 2024-01-01 → 2024-01-15"));
        assert!(output.contains("- Actual: 2024-01-02 → -"));

        let a = output.find("## Paket A").unwrap();
        let b = output.find("## Paket B").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_stage_rows_serialize_as_array() {
        let rows = StageRows(vec![create_test_row("Paket A", 1, "Pengumuman")]);
        let json = serde_json::to_value(&rows).unwrap();

        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["stage"], "Pengumuman");
        assert_eq!(array[0]["status"], "on-time");
        assert_eq!(array[0]["planning_end"], "2024-01-15");
        assert!(array[0]["actual_end"].is_null());
    }
}
