//! CLI settings loaded from `settings.toml`.
//!
//! These settings only locate files and tune logging; the planner's own
//! configuration (users, first day of week) lives in the state document.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use walkplan_core::PlannerError;
use walkplan_core::error::Result;

use crate::paths::WalkplanPaths;
use crate::storage::SettingsFile;

/// Contents of `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Location of the JSON state file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set, e.g. `info`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl AppSettings {
    /// The platform location of `settings.toml`.
    pub fn default_path() -> Result<PathBuf> {
        WalkplanPaths::settings_file()
            .map_err(|e| PlannerError::config(format!("Cannot locate settings: {}", e)))
    }

    /// Loads settings from `path`; defaults if the file is missing or empty.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let file = SettingsFile::<AppSettings>::new(path);
        Ok(file.load()?.unwrap_or_default())
    }

    /// Writes the settings to `path`, creating its directory if needed.
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        SettingsFile::new(path).save(self)?;
        Ok(())
    }

    /// Returns a copy with the given fields replaced. An empty `log_level`
    /// removes the entry.
    pub fn with_changes(&self, state_file: Option<PathBuf>, log_level: Option<&str>) -> Self {
        let mut updated = self.clone();
        if let Some(path) = state_file {
            updated.state_file = Some(path);
        }
        if let Some(level) = log_level.map(str::trim) {
            updated.log_level = (!level.is_empty()).then(|| level.to_string());
        }
        updated
    }

    /// The state file to use: the configured one, else the platform default.
    pub fn resolve_state_file(&self) -> Result<PathBuf> {
        match &self.state_file {
            Some(path) => Ok(path.clone()),
            None => WalkplanPaths::default_state_file().map_err(|e| {
                PlannerError::config(format!("Cannot locate state file: {}", e))
            }),
        }
    }
}
