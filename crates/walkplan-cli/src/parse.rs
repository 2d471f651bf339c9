//! Argument parsers for the command line.

use chrono::NaiveDate;
use walkplan_core::{Assignment, Configuration, DateKey, FirstDayOfWeek, Slot};

pub fn date(s: &str) -> Result<NaiveDate, String> {
    s.parse::<DateKey>()
        .map(|key| key.date())
        .map_err(|e| e.to_string())
}

pub fn first_day(s: &str) -> Result<FirstDayOfWeek, String> {
    s.parse()
        .map_err(|_| format!("'{}' is not a valid first day (Sunday or Monday)", s))
}

/// Slot by name (`morning`) or index (`0`).
pub fn slot(s: &str) -> Result<Slot, String> {
    if let Ok(index) = s.parse::<usize>() {
        return Slot::try_from(index).map_err(|e| e.to_string());
    }
    s.parse()
        .map_err(|_| format!("'{}' is not a slot (morning, afternoon, evening)", s))
}

/// Who to assign: `none`, `a`, `b`, `both`, a configured user name, or `0..3`.
pub fn assignment(s: &str, config: &Configuration) -> Result<Assignment, String> {
    let s = s.trim();
    if let Ok(value) = s.parse::<u64>() {
        return Assignment::try_from(value).map_err(|e| e.to_string());
    }
    let lower = s.to_lowercase();
    match lower.as_str() {
        "none" | "-" | "—" => return Ok(Assignment::Unassigned),
        "a" => return Ok(Assignment::UserA),
        "b" => return Ok(Assignment::UserB),
        "both" => return Ok(Assignment::Both),
        _ => {}
    }
    if lower == config.user_a().to_lowercase() {
        Ok(Assignment::UserA)
    } else if lower == config.user_b().to_lowercase() {
        Ok(Assignment::UserB)
    } else {
        Err(format!(
            "'{}' is not one of none, a, b, both, {}, {}",
            s,
            config.user_a(),
            config.user_b()
        ))
    }
}
