//! Planner configuration domain model.
//!
//! The configuration is stored under the reserved `"config"` key of the state
//! document. [`Configuration::new`] is the validation boundary: every other
//! component trusts that both user names are non-empty and trimmed.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{PlannerError, Result};
use crate::slot::Assignment;

/// Default name offered for the first user during setup.
pub const DEFAULT_USER_A: &str = "User1";
/// Default name offered for the second user during setup.
pub const DEFAULT_USER_B: &str = "User2";

/// Label shown for an unassigned slot.
pub const UNASSIGNED_LABEL: &str = "—";
/// Label shown for a slot assigned to both users.
pub const BOTH_LABEL: &str = "Both";

/// The day a planner week starts on. Only Sunday and Monday are offered.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum FirstDayOfWeek {
    #[default]
    Sunday,
    Monday,
}

impl FirstDayOfWeek {
    /// The chrono weekday this setting stands for.
    pub fn weekday(self) -> Weekday {
        match self {
            FirstDayOfWeek::Sunday => Weekday::Sun,
            FirstDayOfWeek::Monday => Weekday::Mon,
        }
    }
}

/// Shape of the `"config"` value on disk, before validation.
#[derive(Debug, Deserialize)]
struct StoredConfiguration {
    first_day_of_week: FirstDayOfWeek,
    users: [String; 2],
}

/// Validated planner configuration: two named users and the week start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredConfiguration")]
pub struct Configuration {
    first_day_of_week: FirstDayOfWeek,
    users: [String; 2],
}

impl Configuration {
    /// Validates and builds a configuration.
    ///
    /// Names are trimmed; an empty name after trimming is rejected.
    pub fn new(
        user_a: impl AsRef<str>,
        user_b: impl AsRef<str>,
        first_day_of_week: FirstDayOfWeek,
    ) -> Result<Self> {
        let user_a = user_a.as_ref().trim();
        let user_b = user_b.as_ref().trim();
        if user_a.is_empty() || user_b.is_empty() {
            return Err(PlannerError::config("User names cannot be empty."));
        }
        Ok(Self {
            first_day_of_week,
            users: [user_a.to_string(), user_b.to_string()],
        })
    }

    pub fn user_a(&self) -> &str {
        &self.users[0]
    }

    pub fn user_b(&self) -> &str {
        &self.users[1]
    }

    pub fn users(&self) -> &[String; 2] {
        &self.users
    }

    pub fn first_day_of_week(&self) -> FirstDayOfWeek {
        self.first_day_of_week
    }

    /// Returns a copy with some fields replaced, re-running validation.
    pub fn with_changes(
        &self,
        user_a: Option<&str>,
        user_b: Option<&str>,
        first_day_of_week: Option<FirstDayOfWeek>,
    ) -> Result<Self> {
        Self::new(
            user_a.unwrap_or(self.user_a()),
            user_b.unwrap_or(self.user_b()),
            first_day_of_week.unwrap_or(self.first_day_of_week),
        )
    }

    /// Display label for a slot value: the user name, `Both`, or a dash.
    pub fn label(&self, assignment: Assignment) -> &str {
        match assignment {
            Assignment::Unassigned => UNASSIGNED_LABEL,
            Assignment::UserA => self.user_a(),
            Assignment::UserB => self.user_b(),
            Assignment::Both => BOTH_LABEL,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            first_day_of_week: FirstDayOfWeek::default(),
            users: [DEFAULT_USER_A.to_string(), DEFAULT_USER_B.to_string()],
        }
    }
}

impl TryFrom<StoredConfiguration> for Configuration {
    type Error = PlannerError;

    fn try_from(stored: StoredConfiguration) -> Result<Self> {
        let [user_a, user_b] = stored.users;
        Self::new(user_a, user_b, stored.first_day_of_week)
    }
}
