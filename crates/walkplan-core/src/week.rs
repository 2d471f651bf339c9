//! Week window computation.
//!
//! A week is the seven consecutive days starting on the configured first day
//! of the week and containing a reference date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::config::FirstDayOfWeek;
use crate::error::{PlannerError, Result};
use crate::state::DateKey;

/// Number of days in a week window.
pub const DAYS_PER_WEEK: usize = 7;

/// The seven days of one planner week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: [NaiveDate; DAYS_PER_WEEK],
}

/// Computes the week containing `reference` that starts on `first_day`.
///
/// `offset = (dow(reference) - dow(first_day) + 7) mod 7` with Monday as 0;
/// the window starts `offset` days before `reference`.
///
/// Fails with [`PlannerError::DateOutOfRange`] only when part of the window
/// falls outside the calendar chrono can represent.
pub fn week_bounds(reference: NaiveDate, first_day: FirstDayOfWeek) -> Result<WeekWindow> {
    let reference_index = reference.weekday().num_days_from_monday();
    let target_index = first_day.weekday().num_days_from_monday();
    let offset = (reference_index + 7 - target_index) % 7;

    let out_of_range = || PlannerError::DateOutOfRange(format!("week of {}", reference));
    let start = reference
        .checked_sub_signed(Duration::days(i64::from(offset)))
        .ok_or_else(out_of_range)?;
    let end = start
        .checked_add_signed(Duration::days(DAYS_PER_WEEK as i64 - 1))
        .ok_or_else(out_of_range)?;
    // Every day lies between `start` and `end`, both representable
    let days: [NaiveDate; DAYS_PER_WEEK] =
        std::array::from_fn(|i| start + Duration::days(i as i64));

    Ok(WeekWindow { start, end, days })
}

impl WeekWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Date keys of the seven days, in order.
    pub fn date_keys(&self) -> [DateKey; DAYS_PER_WEEK] {
        self.days.map(DateKey::new)
    }

    /// Heading such as `Week of June 03 – June 09, 2024`.
    pub fn title(&self) -> String {
        format!(
            "Week of {} – {}",
            self.start.format("%B %d"),
            self.end.format("%B %d, %Y")
        )
    }
}
