//! Slot and assignment value objects.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{PlannerError, Result};

/// Number of walk slots in a day.
pub const SLOTS_PER_DAY: usize = 3;

/// One of the three daily walk windows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Slot {
    Morning,
    Afternoon,
    Evening,
}

impl Slot {
    /// Position of the slot inside a [`DayRecord`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// All slots in display order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Slot::iter()
    }
}

impl TryFrom<usize> for Slot {
    type Error = PlannerError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Slot::Morning),
            1 => Ok(Slot::Afternoon),
            2 => Ok(Slot::Evening),
            other => Err(PlannerError::InvalidSlot(other)),
        }
    }
}

/// Who is assigned to a slot. Persisted as the integers `0..=3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u8")]
pub enum Assignment {
    #[default]
    Unassigned = 0,
    UserA = 1,
    UserB = 2,
    Both = 3,
}

impl Assignment {
    /// Next value in the toggle cycle `0 → 1 → 2 → 3 → 0`.
    pub fn advance(self) -> Self {
        match self {
            Assignment::Unassigned => Assignment::UserA,
            Assignment::UserA => Assignment::UserB,
            Assignment::UserB => Assignment::Both,
            Assignment::Both => Assignment::Unassigned,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_assigned(self) -> bool {
        self != Assignment::Unassigned
    }
}

impl TryFrom<u64> for Assignment {
    type Error = PlannerError;

    fn try_from(value: u64) -> Result<Self> {
        match value {
            0 => Ok(Assignment::Unassigned),
            1 => Ok(Assignment::UserA),
            2 => Ok(Assignment::UserB),
            3 => Ok(Assignment::Both),
            other => Err(PlannerError::InvalidAssignment(other)),
        }
    }
}

impl From<Assignment> for u8 {
    fn from(assignment: Assignment) -> Self {
        assignment.value()
    }
}

/// The three slot assignments of one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRecord([Assignment; SLOTS_PER_DAY]);

impl DayRecord {
    pub fn new(assignments: [Assignment; SLOTS_PER_DAY]) -> Self {
        Self(assignments)
    }

    /// Builds a record from raw slot values, failing on anything outside `0..=3`.
    pub fn from_values(values: [u64; SLOTS_PER_DAY]) -> Result<Self> {
        let [morning, afternoon, evening] = values;
        Ok(Self([
            Assignment::try_from(morning)?,
            Assignment::try_from(afternoon)?,
            Assignment::try_from(evening)?,
        ]))
    }

    pub fn get(&self, slot: Slot) -> Assignment {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, assignment: Assignment) {
        self.0[slot.index()] = assignment;
    }

    pub fn assignments(&self) -> &[Assignment; SLOTS_PER_DAY] {
        &self.0
    }

    /// Raw integer form, as written to disk.
    pub fn values(&self) -> [u8; SLOTS_PER_DAY] {
        self.0.map(Assignment::value)
    }

    /// Number of slots holding `assignment`.
    pub fn count(&self, assignment: Assignment) -> usize {
        self.0.iter().filter(|a| **a == assignment).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|a| !a.is_assigned())
    }

    /// Slot/assignment pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Assignment)> + '_ {
        Slot::all().map(|slot| (slot, self.get(slot)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_advance_cycle() {
        assert_eq!(Assignment::Unassigned.advance(), Assignment::UserA);
        assert_eq!(Assignment::UserA.advance(), Assignment::UserB);
        assert_eq!(Assignment::UserB.advance(), Assignment::Both);
        assert_eq!(Assignment::Both.advance(), Assignment::Unassigned);
    }

    #[test]
    fn test_advance_four_times_is_identity() {
        for value in 0..=3u64 {
            let start = Assignment::try_from(value).unwrap();
            let end = start.advance().advance().advance().advance();
            assert_eq!(start, end);
        }
    }

    #[test]
    fn test_assignment_out_of_range_fails_fast() {
        assert_eq!(
            Assignment::try_from(4u64),
            Err(PlannerError::InvalidAssignment(4))
        );
    }

    #[test]
    fn test_assignment_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Assignment::Both).unwrap(), "3");
        let parsed: Assignment = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Assignment::UserB);
        assert!(serde_json::from_str::<Assignment>("9").is_err());
    }

    #[test]
    fn test_slot_index_round_trip() {
        for slot in Slot::all() {
            assert_eq!(Slot::try_from(slot.index()).unwrap(), slot);
        }
        assert_eq!(Slot::try_from(3usize), Err(PlannerError::InvalidSlot(3)));
    }

    #[test]
    fn test_slot_names() {
        assert_eq!(Slot::from_str("evening").unwrap(), Slot::Evening);
        assert_eq!(Slot::Morning.to_string(), "Morning");
        assert_eq!(Slot::all().count(), SLOTS_PER_DAY);
    }

    #[test]
    fn test_day_record_set_touches_one_slot() {
        let mut record = DayRecord::default();
        assert!(record.is_empty());
        record.set(Slot::Afternoon, Assignment::Both);
        assert_eq!(record.values(), [0, 3, 0]);
        assert_eq!(record.count(Assignment::Both), 1);
        assert_eq!(record.count(Assignment::Unassigned), 2);
    }

    #[test]
    fn test_day_record_from_values() {
        let record = DayRecord::from_values([1, 2, 3]).unwrap();
        assert_eq!(record.get(Slot::Morning), Assignment::UserA);
        assert_eq!(record.get(Slot::Evening), Assignment::Both);
        assert!(DayRecord::from_values([0, 0, 4]).is_err());
    }
}
