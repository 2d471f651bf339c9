//! Per-date entries as found on disk, and their normalization.
//!
//! Historical files hold two shapes for a day:
//!
//! - legacy flat: `[1, 0, 2]`
//! - current nested: `[[1, 0, 2]]`
//!
//! The shape is resolved once, when the document is decoded, into a
//! [`DayEntry`]. Anything that is neither shape is kept verbatim as
//! [`DayEntry::Malformed`] until the date is read, at which point it is
//! discarded and replaced by an all-unassigned record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::slot::{Assignment, DayRecord, SLOTS_PER_DAY};

/// A decoded per-date value.
#[derive(Debug, Clone, PartialEq)]
pub enum DayEntry {
    /// Single-element array wrapping three slot values.
    Current(DayRecord),
    /// Flat three-element array written by older versions.
    Legacy(DayRecord),
    /// Any other shape; the raw value is preserved until repaired.
    Malformed(Value),
}

/// How a stored entry was turned into a [`DayRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Nothing stored for the date; a fresh record was produced.
    Missing,
    /// Stored in the current shape; taken as-is.
    Current,
    /// Stored in the legacy flat shape; reinterpreted without loss.
    Legacy,
    /// Stored in an unrecognized shape; discarded and reset.
    Reset,
}

impl Normalization {
    /// Whether the normalized record differs from what is stored and
    /// should be written back before further use.
    pub fn needs_write_back(self) -> bool {
        self != Normalization::Current
    }

    /// Whether stored data was thrown away.
    pub fn is_data_loss(self) -> bool {
        self == Normalization::Reset
    }
}

/// A normalized record together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub record: DayRecord,
    pub outcome: Normalization,
}

impl DayEntry {
    /// Classifies a raw JSON value into one of the known shapes.
    pub fn classify(value: Value) -> Self {
        if let Some(record) = record_from_slots(&value) {
            return DayEntry::Legacy(record);
        }
        if let Value::Array(outer) = &value {
            if let [inner] = outer.as_slice() {
                if let Some(record) = record_from_slots(inner) {
                    return DayEntry::Current(record);
                }
            }
        }
        DayEntry::Malformed(value)
    }

    /// Produces the three-slot record for this entry.
    pub fn normalize(&self) -> Normalized {
        match self {
            DayEntry::Current(record) => Normalized {
                record: *record,
                outcome: Normalization::Current,
            },
            DayEntry::Legacy(record) => Normalized {
                record: *record,
                outcome: Normalization::Legacy,
            },
            DayEntry::Malformed(_) => Normalized {
                record: DayRecord::default(),
                outcome: Normalization::Reset,
            },
        }
    }

    /// Normalizes an optional entry, treating absence as a fresh record.
    pub fn normalize_optional(entry: Option<&DayEntry>) -> Normalized {
        match entry {
            Some(entry) => entry.normalize(),
            None => Normalized {
                record: DayRecord::default(),
                outcome: Normalization::Missing,
            },
        }
    }

    /// The JSON written to disk for this entry.
    ///
    /// Recognized records are always written in the current nested shape.
    pub fn to_value(&self) -> Value {
        match self {
            DayEntry::Current(record) | DayEntry::Legacy(record) => Value::Array(vec![
                Value::Array(record.values().iter().map(|v| Value::from(*v)).collect()),
            ]),
            DayEntry::Malformed(raw) => raw.clone(),
        }
    }
}

impl From<DayRecord> for DayEntry {
    fn from(record: DayRecord) -> Self {
        DayEntry::Current(record)
    }
}

impl Serialize for DayEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DayEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(DayEntry::classify)
    }
}

/// Reads a flat array of exactly three integer-like slot values.
fn record_from_slots(value: &Value) -> Option<DayRecord> {
    let items = value.as_array()?;
    if items.len() != SLOTS_PER_DAY {
        return None;
    }
    let mut record = [Assignment::Unassigned; SLOTS_PER_DAY];
    for (slot, item) in record.iter_mut().zip(items) {
        *slot = Assignment::try_from(integer_like(item)?).ok()?;
    }
    Some(DayRecord::new(record))
}

/// Accepts JSON integers and whole, non-negative floats such as `2.0`.
fn integer_like(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(normalized: Normalized) -> [u8; 3] {
        normalized.record.values()
    }

    #[test]
    fn test_current_shape_is_taken_as_is() {
        let entry = DayEntry::classify(json!([[1, 0, 2]]));
        assert!(matches!(entry, DayEntry::Current(_)));
        let normalized = entry.normalize();
        assert_eq!(values(normalized), [1, 0, 2]);
        assert_eq!(normalized.outcome, Normalization::Current);
        assert!(!normalized.outcome.needs_write_back());
    }

    #[test]
    fn test_legacy_flat_shape_is_reinterpreted() {
        let normalized = DayEntry::classify(json!([1, 2, 3])).normalize();
        assert_eq!(values(normalized), [1, 2, 3]);
        assert_eq!(normalized.outcome, Normalization::Legacy);
        assert!(normalized.outcome.needs_write_back());
        assert!(!normalized.outcome.is_data_loss());
    }

    #[test]
    fn test_all_zero_record_is_idempotent() {
        let first = DayEntry::classify(json!([[0, 0, 0]])).normalize();
        let again = DayEntry::from(first.record).normalize();
        assert_eq!(first.record, again.record);
        assert_eq!(values(again), [0, 0, 0]);
    }

    #[test]
    fn test_corrupt_shapes_reset() {
        for raw in [
            json!([[1, 2], [3]]),
            json!("bad"),
            json!([1, 2]),
            json!([[1, 2, 3], [0, 0, 0]]),
            json!([[[1, 2, 3]]]),
            json!([1, "2", 3]),
            json!([1, 2, 7]),
            json!([1, -1, 0]),
            json!([0.5, 0, 0]),
            json!({"morning": 1}),
            json!(null),
        ] {
            let normalized = DayEntry::classify(raw.clone()).normalize();
            assert_eq!(values(normalized), [0, 0, 0], "{raw} should reset");
            assert!(normalized.outcome.is_data_loss());
        }
    }

    #[test]
    fn test_whole_floats_are_integer_like() {
        let normalized = DayEntry::classify(json!([1.0, 0, 2.0])).normalize();
        assert_eq!(values(normalized), [1, 0, 2]);
    }

    #[test]
    fn test_missing_entry() {
        let normalized = DayEntry::normalize_optional(None);
        assert_eq!(normalized.outcome, Normalization::Missing);
        assert!(normalized.record.is_empty());
    }

    #[test]
    fn test_written_shape() {
        assert_eq!(DayEntry::classify(json!([1, 0, 2])).to_value(), json!([[1, 0, 2]]));
        assert_eq!(DayEntry::classify(json!("bad")).to_value(), json!("bad"));
    }

    #[test]
    fn test_serde_uses_classification() {
        let entry: DayEntry = serde_json::from_value(json!([3, 3, 3])).unwrap();
        assert!(matches!(entry, DayEntry::Legacy(_)));
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!([[3, 3, 3]]));
    }
}
