//! Planner service.
//!
//! Wires the week calculator, the persisted state and the assignment cycle
//! together. The planner holds only the repository: every operation loads
//! the whole document, works on it, and (for mutations) saves it back
//! straight away, so no divergent copy survives a toggle.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Configuration;
use crate::error::{PlannerError, Result};
use crate::slot::{Assignment, DayRecord, Slot, Totals};
use crate::state::{DateKey, PersistedState, StateRepository};
use crate::week::{DAYS_PER_WEEK, WeekWindow, week_bounds};

/// One rendered week: the window, the normalized record of each day and
/// the totals over those days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekView {
    pub config: Configuration,
    pub window: WeekWindow,
    pub days: [(DateKey, DayRecord); DAYS_PER_WEEK],
    pub totals: Totals,
}

impl WeekView {
    pub fn record(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days
            .iter()
            .find(|(key, _)| key.date() == date)
            .map(|(_, record)| record)
    }

    /// Display label of one cell.
    pub fn label(&self, date: NaiveDate, slot: Slot) -> Option<&str> {
        self.record(date)
            .map(|record| self.config.label(record.get(slot)))
    }
}

/// Planner operations over a [`StateRepository`].
pub struct Planner<R> {
    repository: R,
}

impl<R: StateRepository> Planner<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The stored configuration, if setup has been completed.
    pub fn configuration(&self) -> Option<Configuration> {
        self.repository.load().config().cloned()
    }

    pub fn needs_setup(&self) -> bool {
        !self.repository.load().is_configured()
    }

    /// Stores the first configuration. Fails if one already exists.
    pub fn complete_setup(&self, config: Configuration) -> Result<()> {
        let mut state = self.repository.load();
        if state.is_configured() {
            return Err(PlannerError::config(
                "Planner is already configured; update settings instead",
            ));
        }
        state.set_config(config);
        self.repository.save(&state)?;
        tracing::info!("Planner setup completed");
        Ok(())
    }

    /// Replaces the configuration of an already configured planner.
    pub fn update_settings(&self, config: Configuration) -> Result<()> {
        let mut state = self.repository.load();
        if !state.is_configured() {
            return Err(PlannerError::NotConfigured);
        }
        state.set_config(config);
        self.repository.save(&state)?;
        tracing::info!("Planner settings updated");
        Ok(())
    }

    /// Builds the week containing `reference`.
    ///
    /// Records are normalized in the loaded copy only; repairs reach disk
    /// with the next mutation inside the same week.
    pub fn week(&self, reference: NaiveDate) -> Result<WeekView> {
        let mut state = self.repository.load();
        let config = require_config(&state)?;
        let window = week_bounds(reference, config.first_day_of_week())?;
        let days = window
            .date_keys()
            .map(|key| (key, state.day_record(&key)));
        let totals = Totals::of_days(days.iter().map(|(_, record)| record));

        Ok(WeekView {
            config,
            window,
            days,
            totals,
        })
    }

    /// Advances one slot through the assignment cycle and saves.
    pub fn toggle(&self, date: NaiveDate, slot: Slot) -> Result<Assignment> {
        self.mutate_slot(date, slot, Assignment::advance)
    }

    /// Sets one slot to an explicit value and saves.
    pub fn set(&self, date: NaiveDate, slot: Slot, assignment: Assignment) -> Result<Assignment> {
        self.mutate_slot(date, slot, |_| assignment)
    }

    /// Resets every slot of the week containing `reference` and saves.
    pub fn clear_week(&self, reference: NaiveDate) -> Result<WeekWindow> {
        let mut state = self.repository.load();
        let config = require_config(&state)?;
        let window = week_bounds(reference, config.first_day_of_week())?;
        for key in window.date_keys() {
            state.set_day_record(&key, DayRecord::default());
        }
        self.repository.save(&state)?;
        tracing::info!("Cleared {}", window.title());
        Ok(window)
    }

    fn mutate_slot<F>(&self, date: NaiveDate, slot: Slot, f: F) -> Result<Assignment>
    where
        F: FnOnce(Assignment) -> Assignment,
    {
        let mut state = self.repository.load();
        let config = require_config(&state)?;
        // The whole visible week is normalized so its repairs are saved too
        for key in week_bounds(date, config.first_day_of_week())?.date_keys() {
            state.day_record(&key);
        }
        let key = DateKey::new(date);
        let current = state.day_record(&key).get(slot);
        let next = f(current);
        state.set_slot(&key, slot, next);
        self.repository.save(&state)?;
        tracing::debug!(
            "{} {}: {} -> {}",
            key,
            slot,
            current.value(),
            next.value()
        );
        Ok(next)
    }
}

fn require_config(state: &PersistedState) -> Result<Configuration> {
    state.config().cloned().ok_or(PlannerError::NotConfigured)
}
