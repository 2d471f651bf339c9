//! Per-user walk counts over a set of days.

use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use crate::config::Configuration;
use crate::slot::{Assignment, DayRecord};

/// Walk counts for a set of days. Unassigned slots are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub user_a: usize,
    pub user_b: usize,
    pub both: usize,
}

impl Totals {
    /// Counts the assignments of a single day.
    pub fn of_day(record: &DayRecord) -> Self {
        Self {
            user_a: record.count(Assignment::UserA),
            user_b: record.count(Assignment::UserB),
            both: record.count(Assignment::Both),
        }
    }

    /// Sums the assignments of every given day. Order does not matter.
    pub fn of_days<'a>(days: impl IntoIterator<Item = &'a DayRecord>) -> Self {
        days.into_iter().map(Self::of_day).sum()
    }

    /// One-line summary, e.g. `Alex: 2 walks  Sam: 1 walks  Both: 1 walks`.
    pub fn summary(&self, config: &Configuration) -> String {
        format!(
            "{}: {} walks  {}: {} walks  {}: {} walks",
            config.user_a(),
            self.user_a,
            config.user_b(),
            self.user_b,
            config.label(Assignment::Both),
            self.both
        )
    }
}

impl Add for Totals {
    type Output = Totals;

    fn add(self, rhs: Self) -> Self::Output {
        Totals {
            user_a: self.user_a + rhs.user_a,
            user_b: self.user_b + rhs.user_b,
            both: self.both + rhs.both,
        }
    }
}

impl Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Self {
        iter.fold(Totals::default(), Add::add)
    }
}
