//! Slot domain module.
//!
//! # Module Structure
//!
//! - `model`: Slot, Assignment (with the toggle cycle) and DayRecord
//! - `totals`: per-user counts across a set of days

mod model;
mod totals;

// Re-export public API
pub use model::{Assignment, DayRecord, SLOTS_PER_DAY, Slot};
pub use totals::Totals;
