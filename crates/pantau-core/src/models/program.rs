//! Program model: the root of a monitoring snapshot.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Procurement, Stage};

/// Government agency (dinas) that owns a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agency {
    #[serde(rename = "namaDinas")]
    pub name: String,
}

/// A monitored program with its procurement groups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: u64,

    #[serde(rename = "namaProgram")]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    /// Budget as a decimal string of rupiah
    #[serde(rename = "anggaran", default)]
    pub budget: Option<String>,

    #[serde(rename = "isPrioritas", default)]
    pub priority: bool,

    #[serde(rename = "dinas", default)]
    pub agency: Option<Agency>,

    /// References to program-level documents
    #[serde(rename = "dokumenProgram", default)]
    pub documents: Vec<String>,

    #[serde(rename = "pengadaanList", default)]
    pub procurements: Vec<Procurement>,
}

impl Program {
    /// Every stage of every procurement, in procurement then stage order.
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        self.procurements.iter().flat_map(|p| p.stages.iter())
    }

    pub fn agency_name(&self) -> Option<&str> {
        self.agency.as_ref().map(|agency| agency.name.as_str())
    }

    /// Procurement kinds joined the way the program header shows them.
    pub fn kinds(&self) -> String {
        self.procurements
            .iter()
            .map(Procurement::kind_label)
            .filter(|kind| !kind.is_empty())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// A program as found on disk: either the backend response envelope or the
/// bare program object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Snapshot {
    Envelope {
        #[serde(default)]
        msg: Option<String>,
        data: Program,
    },
    Bare(Program),
}

impl Snapshot {
    pub fn into_program(self) -> Program {
        match self {
            Snapshot::Envelope { msg, data } => {
                if let Some(msg) = msg {
                    debug!("Snapshot envelope message: {msg}");
                }
                data
            }
            Snapshot::Bare(program) => program,
        }
    }
}
