//! Interactive session context.
//!
//! The planner core is stateless between calls; the session is the one piece
//! of mutable context (the week being looked at), owned by the caller and
//! passed in each time a week is computed.

use chrono::{Duration, Local, NaiveDate};

use crate::config::FirstDayOfWeek;
use crate::error::{PlannerError, Result};
use crate::week::{WeekWindow, week_bounds};

/// The caller-owned reference date used to pick which week is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    reference: NaiveDate,
}

impl Session {
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// A session positioned on the local current date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Moves the reference date by whole weeks (negative goes back).
    ///
    /// Leaves the session unchanged if the target date is not representable.
    pub fn shift_week(&mut self, delta: i64) -> Result<()> {
        let shifted = Duration::try_weeks(delta)
            .and_then(|weeks| self.reference.checked_add_signed(weeks))
            .ok_or_else(|| {
                PlannerError::DateOutOfRange(format!(
                    "{} shifted by {} weeks",
                    self.reference, delta
                ))
            })?;
        self.reference = shifted;
        Ok(())
    }

    pub fn window(&self, first_day: FirstDayOfWeek) -> Result<WeekWindow> {
        week_bounds(self.reference, first_day)
    }
}

/// Whether `window` is the week that contains `today`.
pub fn is_current_week(window: &WeekWindow, today: NaiveDate) -> bool {
    window.contains(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_week() {
        let mut session = Session::new(date(2024, 6, 5));
        session.shift_week(1).unwrap();
        assert_eq!(session.reference(), date(2024, 6, 12));
        session.shift_week(-2).unwrap();
        assert_eq!(session.reference(), date(2024, 5, 29));
    }

    #[test]
    fn test_shift_week_out_of_range_is_error() {
        let mut session = Session::new(date(2024, 6, 5));
        for delta in [100_000_000, -100_000_000, i64::MAX, i64::MIN] {
            let err = session.shift_week(delta).unwrap_err();
            assert!(matches!(err, PlannerError::DateOutOfRange(_)));
        }
        assert_eq!(session.reference(), date(2024, 6, 5));
    }

    #[test]
    fn test_window_and_current_week() {
        let session = Session::new(date(2024, 6, 5));
        let window = session.window(FirstDayOfWeek::Monday).unwrap();
        assert!(is_current_week(&window, date(2024, 6, 9)));
        assert!(!is_current_week(&window, date(2024, 6, 10)));
    }
}
