//! Canonical `YYYY-MM-DD` keys for per-date records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlannerError, Result};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day used as a key into the persisted state.
///
/// Two keys are equal iff they denote the same day. Only the zero-padded
/// text form is a key: `2024-6-3` or ` 2024-06-03` is rejected, so a document
/// never holds two keys for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || PlannerError::InvalidDateKey(s.to_string());
        let key = NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())?;
        // chrono accepts single-digit fields; only the canonical text is a key
        if key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(key.to_string(), "2024-06-03");
    }

    #[test]
    fn test_parse_requires_canonical_text() {
        let padded: DateKey = "2024-06-03".parse().unwrap();
        assert_eq!(padded.to_string(), "2024-06-03");
        for loose in ["2024-6-3", "2024-06-3", " 2024-06-03", "2024-06-03 "] {
            assert!(
                matches!(loose.parse::<DateKey>(), Err(PlannerError::InvalidDateKey(_))),
                "{loose:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "config".parse::<DateKey>(),
            Err(PlannerError::InvalidDateKey(_))
        ));
        assert!("2024-02-30".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let earlier: DateKey = "2023-12-31".parse().unwrap();
        let later: DateKey = "2024-01-01".parse().unwrap();
        assert!(earlier < later);
    }
}
