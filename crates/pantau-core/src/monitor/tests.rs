//! Tests for the monitor module.

use std::fs;

use jiff::civil::{date, Date};
use tempfile::TempDir;

use super::*;
use crate::{
    error::PantauError,
    models::{Procurement, Progress, ScheduleStatus, Stage, StatusFilter},
};

const TODAY: Date = date(2024, 3, 15);

fn stage(id: u64, name: &str, progress: Progress) -> Stage {
    Stage {
        id,
        order: id as u32,
        name: name.to_string(),
        standard_days: None,
        duration_editable: false,
        weight: 0.0,
        progress,
    }
}

fn planned(start: Date, end: Date) -> Progress {
    Progress {
        planning_start: Some(start),
        planning_end: Some(end),
        ..Default::default()
    }
}

/// Two procurements: one late, one on time and one undetermined stage.
fn create_test_monitor() -> Monitor {
    let program = Program {
        id: 1,
        name: "Program Uji".to_string(),
        slug: "program-uji".to_string(),
        budget: Some("750000000".to_string()),
        priority: false,
        agency: None,
        documents: vec![],
        procurements: vec![
            Procurement {
                id: 10,
                transaction_name: "Konstruksi".to_string(),
                kind: "Tender".to_string(),
                stages: vec![
                    stage(1, "Pengumuman", planned(date(2024, 1, 1), date(2024, 3, 10))),
                    stage(2, "Evaluasi", planned(date(2024, 3, 11), date(2024, 4, 30))),
                ],
            },
            Procurement {
                id: 20,
                transaction_name: "Pengawasan".to_string(),
                kind: "Seleksi".to_string(),
                stages: vec![stage(3, "Persiapan", Progress::default())],
            },
        ],
    };
    Monitor::new(program, TODAY, Locale::Indonesian)
}

#[test]
fn test_timeline_unfiltered() {
    let monitor = create_test_monitor();
    let grid = monitor.timeline(&TimelineQuery::default());

    assert_eq!(grid.today, TODAY);
    assert_eq!(grid.range.start, date(2024, 1, 1));
    assert_eq!(grid.range.end, date(2024, 4, 30));
    assert_eq!(grid.sections.len(), 2);
    assert_eq!(grid.rows().count(), 3);
    assert_eq!(grid.months.iter().map(|m| m.span).sum::<usize>(), grid.width());
}

#[test]
fn test_timeline_follows_filtered_range() {
    let monitor = create_test_monitor();
    let grid = monitor.timeline(&TimelineQuery {
        status: StatusFilter::Late,
        ..Default::default()
    });

    assert_eq!(grid.sections.len(), 1);
    assert_eq!(grid.sections[0].procurement_id, 10);
    let names: Vec<_> = grid.rows().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["Pengumuman"]);
    assert_eq!(grid.range.end, date(2024, 3, 31));
    assert!(grid.rows().all(|row| row.placement.status == ScheduleStatus::Late));
}

#[test]
fn test_timeline_no_match_is_empty() {
    let monitor = create_test_monitor();
    let grid = monitor.timeline(&TimelineQuery {
        search: Some("tidak ada".to_string()),
        ..Default::default()
    });

    assert!(grid.is_empty());
    // The default window still yields columns to draw.
    assert!(grid.width() > 0);
}

#[test]
fn test_query_by_procurement_and_search() {
    let monitor = create_test_monitor();

    let rows = monitor.stage_rows(&TimelineQuery {
        procurement: Some(20),
        ..Default::default()
    });
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stage, "Persiapan");

    // Matching the transaction name keeps all of its stages.
    let rows = monitor.stage_rows(&TimelineQuery {
        search: Some("  KONSTRUKSI ".to_string()),
        ..Default::default()
    });
    assert_eq!(rows.len(), 2);

    let rows = monitor.stage_rows(&TimelineQuery {
        search: Some("evalu".to_string()),
        ..Default::default()
    });
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].stage, "Evaluasi");
}

#[test]
fn test_query_is_unfiltered() {
    assert!(TimelineQuery::default().is_unfiltered());
    assert!(TimelineQuery {
        search: Some("   ".to_string()),
        ..Default::default()
    }
    .is_unfiltered());
    assert!(!TimelineQuery {
        status: StatusFilter::OnTime,
        ..Default::default()
    }
    .is_unfiltered());
}

#[test]
fn test_summary_ignores_filters() {
    let monitor = create_test_monitor();
    let summary = monitor.summary();

    assert_eq!(summary.procurements, 2);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.late, 1);
    assert_eq!(summary.on_time, 1);
    assert_eq!(summary.undetermined, 1);
}

#[test]
fn test_stage_rows_carry_status() {
    let monitor = create_test_monitor();
    let rows = monitor.stage_rows(&TimelineQuery::default());

    let statuses: Vec<_> = rows.iter().map(|row| row.status).collect();
    assert_eq!(
        statuses,
        [
            ScheduleStatus::Late,
            ScheduleStatus::OnTime,
            ScheduleStatus::Undetermined
        ]
    );
    assert!(rows.iter().all(|row| row.program == "Program Uji"));
}

#[test]
fn test_builder_loads_envelope() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("program.json");
    fs::write(
        &path,
        r#"{"msg":"OK","data":{"id":5,"namaProgram":"Dari Berkas","pengadaanList":[]}}"#,
    )
    .expect("Failed to write snapshot");

    let monitor = MonitorBuilder::new()
        .with_snapshot_path(Some(&path))
        .with_today(Some(TODAY))
        .with_locale(Locale::English)
        .build()
        .expect("Failed to build monitor");

    assert_eq!(monitor.program().id, 5);
    assert_eq!(monitor.program().name, "Dari Berkas");
    assert_eq!(monitor.today(), TODAY);
    assert_eq!(monitor.locale(), Locale::English);
}

#[test]
fn test_builder_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing.json");

    let result = MonitorBuilder::new().with_snapshot_path(Some(&path)).build();
    assert!(matches!(result, Err(PantauError::FileSystem { .. })));
}

#[test]
fn test_builder_rejects_malformed_snapshot() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("program.json");
    fs::write(&path, r#"{"data": 42}"#).expect("Failed to write snapshot");

    let result = MonitorBuilder::new().with_snapshot_path(Some(&path)).build();
    assert!(matches!(result, Err(PantauError::Serialization { .. })));
}

#[test]
fn test_builder_defaults_today_to_now() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("program.json");
    fs::write(&path, r#"{"id":1,"namaProgram":"Sekarang"}"#).expect("Failed to write snapshot");

    let before = jiff::Zoned::now().date();
    let monitor = MonitorBuilder::new()
        .with_snapshot_path(Some(&path))
        .with_today(None)
        .build()
        .expect("Failed to build monitor");
    let after = jiff::Zoned::now().date();

    assert!(before <= monitor.today() && monitor.today() <= after);
}
