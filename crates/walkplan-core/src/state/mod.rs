//! Persisted state domain module.
//!
//! # Module Structure
//!
//! - `date_key`: canonical `YYYY-MM-DD` keys
//! - `entry`: on-disk day shapes and their normalization
//! - `model`: the persisted document and slot writes
//! - `repository`: persistence trait implemented by infrastructure

mod date_key;
mod entry;
mod model;
mod repository;

// Re-export public API
pub use date_key::DateKey;
pub use entry::{DayEntry, Normalization, Normalized};
pub use model::{CONFIG_KEY, PersistedState};
pub use repository::StateRepository;
