//! Builder for creating and configuring Monitor instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::{civil::Date, Zoned};
use log::{debug, info};

use super::Monitor;
use crate::{
    error::{PantauError, Result},
    locale::Locale,
    models::Snapshot,
};

/// Builder for creating and configuring Monitor instances.
#[derive(Debug, Clone, Default)]
pub struct MonitorBuilder {
    snapshot_path: Option<PathBuf>,
    today: Option<Date>,
    locale: Locale,
}

impl MonitorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom snapshot file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pantau/program.json` or
    /// `~/.local/share/pantau/program.json`
    pub fn with_snapshot_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.snapshot_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Pins the evaluation date. Defaults to the current date in the system
    /// time zone.
    pub fn with_today(mut self, today: Option<Date>) -> Self {
        if let Some(today) = today {
            self.today = Some(today);
        }
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Loads the snapshot and builds the monitor.
    ///
    /// # Errors
    ///
    /// Returns `PantauError::XdgDirectory` if no path was given and the
    /// default location cannot be resolved
    /// Returns `PantauError::FileSystem` if the snapshot cannot be read
    /// Returns `PantauError::Serialization` if it is not a program snapshot
    pub fn build(self) -> Result<Monitor> {
        let path = match self.snapshot_path {
            Some(path) => path,
            None => Self::default_snapshot_path()?,
        };

        debug!("Loading snapshot from {}", path.display());
        let raw = fs::read_to_string(&path).map_err(|e| PantauError::file_system(&path, e))?;
        let program = serde_json::from_str::<Snapshot>(&raw)?.into_program();

        let today = self.today.unwrap_or_else(|| Zoned::now().date());
        info!(
            "Loaded program {} '{}' with {} procurements, evaluating as of {}",
            program.id,
            program.name,
            program.procurements.len(),
            today
        );

        Ok(Monitor::new(program, today, self.locale))
    }

    /// Returns the default snapshot path following XDG Base Directory
    /// specification.
    fn default_snapshot_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pantau")
            .place_data_file("program.json")
            .map_err(|e| PantauError::XdgDirectory(e.to_string()))
    }
}
