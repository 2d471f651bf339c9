//! Platform path management for walkplan files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/walkplan/          # Config directory
//! └── settings.toml            # CLI settings (state file location, log level)
//!
//! ~/.local/share/walkplan/     # Data directory
//! └── state.json               # Planner state (configuration + day records)
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "walkplan";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves walkplan directories via the `dirs` crate (XDG on Linux,
/// the platform equivalents elsewhere).
pub struct WalkplanPaths;

impl WalkplanPaths {
    /// Returns the walkplan configuration directory, e.g. `~/.config/walkplan/`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the walkplan data directory, e.g. `~/.local/share/walkplan/`.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn settings_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }

    pub fn default_state_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("state.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        // Only meaningful where a home directory exists
        if let Ok(settings) = WalkplanPaths::settings_file() {
            assert!(settings.ends_with("walkplan/settings.toml"));
        }
        if let Ok(state) = WalkplanPaths::default_state_file() {
            assert!(state.ends_with("walkplan/state.json"));
        }
    }
}
