//! Text rendering of a [`TimelineGrid`].
//!
//! The grid is emitted as a fenced `text` block so markdown renderers keep
//! the columns aligned:
//!
//! ```text
//!                  Januari 2024    Februari 2024
//!                  M1  M2  M3  M4  M1  M2  M3  M4
//! Konstruksi
//!   1. Pengumuman  ░░░ ███ ███  ·   ·   ·   ·   ·  ! Late
//! ```

use std::fmt;

use crate::timeline::{CellKind, TimelineGrid, TimelineRow};

/// Width of one week column, separator included.
const CELL_WIDTH: usize = 4;
const NAME_MIN_WIDTH: usize = 12;
const NAME_MAX_WIDTH: usize = 32;

fn cell(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Empty => " ·  ",
        CellKind::PlanStart | CellKind::PlanFill => "░░░ ",
        CellKind::ActualStart | CellKind::ActualFill => "███ ",
    }
}

fn row_label(row: &TimelineRow) -> String {
    format!("  {}. {}", row.order, row.name)
}

/// Pad or cut `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text:<width$}")
    }
}

impl fmt::Display for TimelineGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No stages found.");
        }

        let name_width = self
            .rows()
            .map(|row| row_label(row).chars().count())
            .max()
            .unwrap_or_default()
            .clamp(NAME_MIN_WIDTH, NAME_MAX_WIDTH)
            + 1;

        writeln!(f, "```text")?;

        write!(f, "{}", fit("", name_width))?;
        for month in &self.months {
            let label = format!("{} {}", month.month_name, month.year);
            write!(f, "{}", fit(&label, month.span * CELL_WIDTH))?;
        }
        writeln!(f)?;

        write!(f, "{}", fit("", name_width))?;
        for column in &self.columns {
            write!(f, "{}", fit(&column.label, CELL_WIDTH))?;
        }
        writeln!(f)?;

        for section in &self.sections {
            writeln!(f, "{}", section.transaction_name)?;
            for row in &section.rows {
                write!(f, "{}", fit(&row_label(row), name_width))?;
                for kind in row.placement.cells(self.width()) {
                    write!(f, "{}", cell(kind))?;
                }
                writeln!(f, " {}", row.placement.status.with_icon())?;
            }
        }

        writeln!(f, "```")?;
        writeln!(f)?;
        writeln!(
            f,
            "░ planning  █ actual  · no activity  (as of {}, {} → {})",
            self.today, self.range.start, self.range.end
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        locale::Locale,
        models::{Procurement, Progress, Stage},
    };

    fn create_test_procurement(name: &str, stages: Vec<Stage>) -> Procurement {
        Procurement {
            id: 1,
            transaction_name: name.to_string(),
            kind: "Tender".to_string(),
            stages,
        }
    }

    fn create_test_stage(order: u32, name: &str, progress: Progress) -> Stage {
        Stage {
            id: u64::from(order),
            order,
            name: name.to_string(),
            standard_days: None,
            duration_editable: false,
            weight: 0.0,
            progress,
        }
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("M1", 4), "M1  ");
        assert_eq!(fit("Februari 2024", 8), "Februar…");
        assert_eq!(fit("Februari 2024", 8).chars().count(), 8);
    }

    #[test]
    fn test_empty_grid() {
        let grid = TimelineGrid::build(&[], date(2024, 3, 15), Locale::Indonesian);
        assert_eq!(grid.to_string(), "No stages found.\n");
    }

    #[test]
    fn test_grid_rendering() {
        let stage = create_test_stage(
            1,
            "Pengumuman",
            Progress {
                planning_start: Some(date(2024, 1, 1)),
                planning_end: Some(date(2024, 1, 15)),
                actual_start: Some(date(2024, 1, 8)),
                actual_end: Some(date(2024, 1, 10)),
                ..Default::default()
            },
        );
        let grid = TimelineGrid::build(
            &[create_test_procurement("Konstruksi Jembatan", vec![stage])],
            date(2024, 3, 15),
            Locale::Indonesian,
        );
        let output = grid.to_string();

        assert!(output.starts_with("```text\n"));
        assert!(output.contains("Januari 2024"));
        assert!(output.contains("M1  M2  M3  M4  M4"));
        assert!(output.contains("Konstruksi Jembatan\n"));

        let row = output
            .lines()
            .find(|line| line.contains("1. Pengumuman"))
            .unwrap();
        assert!(row.contains("░░░ ███ ░░░ "));
        assert!(row.ends_with("✓ On time"));
        assert!(output.contains("as of 2024-03-15, 2024-01-01 → 2024-01-31"));
    }

    #[test]
    fn test_rows_share_width() {
        let stages = vec![
            create_test_stage(
                1,
                "A",
                Progress {
                    planning_start: Some(date(2024, 1, 1)),
                    planning_end: Some(date(2024, 2, 20)),
                    ..Default::default()
                },
            ),
            create_test_stage(2, "A much longer stage name", Progress::default()),
        ];
        let grid = TimelineGrid::build(
            &[create_test_procurement("Paket", stages)],
            date(2024, 1, 10),
            Locale::English,
        );
        let output = grid.to_string();

        let icon_columns: Vec<usize> = output
            .lines()
            .filter(|line| line.starts_with("  1.") || line.starts_with("  2."))
            .filter_map(|line| line.chars().position(|c| c == '✓' || c == '○'))
            .collect();
        assert_eq!(icon_columns.len(), 2);
        assert_eq!(icon_columns[0], icon_columns[1]);
        assert!(output.contains("January 2024"));
        assert!(output.contains("W1  W2"));
    }
}
