pub mod config;
pub mod error;
pub mod planner;
pub mod session;
pub mod slot;
pub mod state;
pub mod week;

// Re-export common types
pub use config::{Configuration, FirstDayOfWeek};
pub use error::{PlannerError, Result};
pub use planner::{Planner, WeekView};
pub use session::Session;
pub use slot::{Assignment, DayRecord, Slot, Totals};
pub use state::{DateKey, PersistedState, StateRepository};
pub use week::{WeekWindow, week_bounds};
