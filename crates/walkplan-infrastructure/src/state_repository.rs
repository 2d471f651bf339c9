//! JSON file implementation of the state repository.

use std::path::{Path, PathBuf};

use walkplan_core::error::Result;
use walkplan_core::state::{PersistedState, StateRepository};

use crate::storage::StateFileStorage;

/// State repository backed by one JSON file.
///
/// Loading never fails: a missing file is a first run, and a file that
/// cannot be read or parsed is treated the same way (logged at `warn`).
/// The next save overwrites it.
///
/// # Example
///
/// ```ignore
/// use walkplan_infrastructure::JsonStateRepository;
///
/// let repo = JsonStateRepository::with_path("data/state.json".into());
/// let state = repo.load();
/// ```
pub struct JsonStateRepository {
    storage: StateFileStorage,
}

impl JsonStateRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            storage: StateFileStorage::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }
}

impl StateRepository for JsonStateRepository {
    fn load(&self) -> PersistedState {
        match self.storage.load() {
            Ok(Some(document)) => PersistedState::from_value(document),
            Ok(None) => {
                tracing::debug!("No state at {}; starting fresh", self.path().display());
                PersistedState::new()
            }
            Err(e) => {
                tracing::warn!(
                    "Unreadable state at {} ({}); starting from empty state",
                    self.path().display(),
                    e
                );
                PersistedState::new()
            }
        }
    }

    fn save(&self, state: &PersistedState) -> Result<()> {
        self.storage.save(&state.to_value())?;
        tracing::debug!("Saved state to {}", self.path().display());
        Ok(())
    }
}
