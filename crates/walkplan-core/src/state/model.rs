//! Persisted planner state.
//!
//! The state is one JSON object: the reserved `"config"` key holds the
//! [`Configuration`], every `YYYY-MM-DD` key holds a [`DayEntry`]. Keys that
//! are neither are kept untouched so a save never drops foreign data.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::Configuration;
use crate::error::Result;
use crate::slot::{Assignment, DayRecord, Slot};
use crate::state::date_key::DateKey;
use crate::state::entry::{DayEntry, Normalization, Normalized};

/// Reserved top-level key for the configuration.
pub const CONFIG_KEY: &str = "config";

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    config: Option<Configuration>,
    days: BTreeMap<DateKey, DayEntry>,
    other: Map<String, Value>,
}

impl PersistedState {
    /// Creates an empty state, equivalent to a first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a document. Never fails: unusable parts are dropped or kept raw.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            tracing::warn!("State document is not a JSON object; starting from empty state");
            return Self::default();
        };

        let mut state = Self::default();
        for (key, value) in map {
            if key == CONFIG_KEY {
                match serde_json::from_value::<Configuration>(value) {
                    Ok(config) => state.config = Some(config),
                    Err(e) => {
                        tracing::warn!("Ignoring unusable configuration ({}); setup required", e)
                    }
                }
                continue;
            }
            match key.parse::<DateKey>() {
                Ok(date_key) => {
                    state.days.insert(date_key, DayEntry::classify(value));
                }
                Err(_) => {
                    tracing::debug!("Preserving unknown state key '{}'", key);
                    state.other.insert(key, value);
                }
            }
        }
        state
    }

    /// Encodes the full document. Date records use the current nested shape.
    pub fn to_value(&self) -> Value {
        let mut map = self.other.clone();
        if let Some(config) = &self.config {
            let config = serde_json::to_value(config).unwrap_or(Value::Null);
            map.insert(CONFIG_KEY.to_string(), config);
        }
        for (key, entry) in &self.days {
            map.insert(key.to_string(), entry.to_value());
        }
        Value::Object(map)
    }

    pub fn config(&self) -> Option<&Configuration> {
        self.config.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub fn set_config(&mut self, config: Configuration) {
        self.config = Some(config);
    }

    /// The stored entry for a date, in whatever shape it was decoded.
    pub fn entry(&self, key: &DateKey) -> Option<&DayEntry> {
        self.days.get(key)
    }

    /// Dates that have an entry, in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// Number of dates with an entry.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Normalized copy of the record at `key`, without touching the state.
    ///
    /// When `outcome.needs_write_back()` is true the caller must store the
    /// record (see [`PersistedState::day_record`]) before relying on it.
    pub fn get_day_record(&self, key: &DateKey) -> Normalized {
        DayEntry::normalize_optional(self.days.get(key))
    }

    /// Normalizes the record at `key` and writes the result back.
    pub fn day_record(&mut self, key: &DateKey) -> DayRecord {
        let normalized = self.get_day_record(key);
        match normalized.outcome {
            Normalization::Current | Normalization::Missing => {}
            Normalization::Legacy => {
                tracing::debug!("Reinterpreted legacy flat record for {}", key);
            }
            Normalization::Reset => {
                if let Some(DayEntry::Malformed(raw)) = self.days.get(key) {
                    tracing::warn!(
                        "Discarded malformed record for {} ({}); reset to unassigned",
                        key,
                        raw
                    );
                }
            }
        }
        if normalized.outcome.needs_write_back() {
            self.days.insert(*key, DayEntry::Current(normalized.record));
        }
        normalized.record
    }

    /// Sets one slot of one date. Other slots and dates are untouched.
    pub fn set_slot(&mut self, key: &DateKey, slot: Slot, value: Assignment) {
        let mut record = self.day_record(key);
        record.set(slot, value);
        self.days.insert(*key, DayEntry::Current(record));
    }

    /// Raw-integer form of [`PersistedState::set_slot`]; fails fast on an
    /// out-of-range slot index or assignment value.
    pub fn set_slot_index(&mut self, key: &DateKey, slot_index: usize, value: u64) -> Result<()> {
        let slot = Slot::try_from(slot_index)?;
        let value = Assignment::try_from(value)?;
        self.set_slot(key, slot, value);
        Ok(())
    }

    /// Replaces the whole record of a date.
    pub fn set_day_record(&mut self, key: &DateKey, record: DayRecord) {
        self.days.insert(*key, DayEntry::Current(record));
    }
}

impl Serialize for PersistedState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PersistedState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(PersistedState::from_value)
    }
}
