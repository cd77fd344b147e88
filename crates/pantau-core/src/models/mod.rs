//! Data models for programs, procurements and stages.
//!
//! These mirror the payload the monitoring backend returns for a program:
//! a [`Program`] holds [`Procurement`] groups, each an ordered list of
//! [`Stage`]s whose [`Progress`] carries the planned and actual dates. Field
//! names follow the backend JSON through serde renames; Rust names are
//! English.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use pantau_core::models::{Program, ScheduleStatus, Snapshot};
//!
//! let json = r#"{
//!     "data": {
//!         "id": 7,
//!         "namaProgram": "Jalan Provinsi",
//!         "pengadaanList": [{
//!             "id": 1,
//!             "namaTransaksi": "Konstruksi",
//!             "tahapanList": [{
//!                 "idTahapan": 10,
//!                 "noUrut": 1,
//!                 "namaTahapan": "Pengumuman",
//!                 "progres": { "planningTanggalSelesai": "2024-03-10T00:00:00.000Z" }
//!             }]
//!         }]
//!     }
//! }"#;
//!
//! let program: Program = serde_json::from_str::<Snapshot>(json)?.into_program();
//! let stage = program.stages().next().unwrap();
//! assert_eq!(stage.status(date(2024, 3, 15)), ScheduleStatus::Late);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod dates;
pub mod procurement;
pub mod program;
pub mod schedule;
pub mod stage;
pub mod status;
pub mod summary;


pub use procurement::{method_code, Procurement, ProcurementMethod};
pub use program::{Agency, Program, Snapshot};
pub use schedule::Schedule;
pub use stage::{Progress, Stage};
pub use status::{ScheduleStatus, StatusFilter};
pub use summary::{StageRow, StatusSummary};
