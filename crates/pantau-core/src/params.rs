//! Parameter structures for monitoring views.
//!
//! These are shared by every front end without framework-specific derives;
//! the CLI wraps them in clap argument structs and converts with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Monitor
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Procurement, StatusFilter};

/// Which part of a program a view shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineQuery {
    /// Keep stages with this status
    #[serde(default)]
    pub status: StatusFilter,

    /// Show only the procurement with this id
    #[serde(default)]
    pub procurement: Option<u64>,

    /// Case-insensitive text matched against stage and transaction names
    #[serde(default)]
    pub search: Option<String>,
}

impl TimelineQuery {
    /// Filter `procurements` down to the stages this query keeps.
    ///
    /// Procurements left without stages are dropped.
    pub fn apply(&self, procurements: &[Procurement], today: Date) -> Vec<Procurement> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
            .map(str::to_lowercase);

        procurements
            .iter()
            .filter(|p| self.procurement.map_or(true, |id| p.id == id))
            .filter_map(|procurement| {
                let transaction_matches = needle.as_deref().map_or(true, |needle| {
                    procurement.transaction_name.to_lowercase().contains(needle)
                });
                let stages: Vec<_> = procurement
                    .stages
                    .iter()
                    .filter(|stage| self.status.matches(stage.status(today)))
                    .filter(|stage| {
                        transaction_matches
                            || needle
                                .as_deref()
                                .map_or(true, |needle| stage.name.to_lowercase().contains(needle))
                    })
                    .cloned()
                    .collect();

                (!stages.is_empty()).then(|| Procurement {
                    id: procurement.id,
                    transaction_name: procurement.transaction_name.clone(),
                    kind: procurement.kind.clone(),
                    stages,
                })
            })
            .collect()
    }

    /// Whether this query keeps everything.
    pub fn is_unfiltered(&self) -> bool {
        self.status == StatusFilter::All
            && self.procurement.is_none()
            && self.search.as_deref().map_or(true, |s| s.trim().is_empty())
    }
}
