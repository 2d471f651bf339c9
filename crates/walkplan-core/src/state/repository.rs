//! State repository trait.

use crate::error::Result;
use crate::state::model::PersistedState;

/// Durable storage for the planner state document.
///
/// Every access is a whole-document read or write; nothing is held between
/// calls, so the last save wins when two sessions race.
pub trait StateRepository: Send + Sync {
    /// Loads the state. A missing or unreadable source yields an empty state.
    fn load(&self) -> PersistedState;

    /// Writes the full state, replacing what was stored.
    fn save(&self, state: &PersistedState) -> Result<()>;
}
