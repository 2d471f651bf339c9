use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use walkplan_core::{Assignment, Planner, PlannerError, Slot};
use walkplan_infrastructure::JsonStateRepository;

use crate::{parse, render};

pub fn toggle(planner: &Planner<JsonStateRepository>, date: NaiveDate, slot: Slot) -> Result<()> {
    let next = planner.toggle(date, slot)?;
    report(planner, date, slot, next)
}

pub fn set(
    planner: &Planner<JsonStateRepository>,
    date: NaiveDate,
    slot: Slot,
    who: &str,
) -> Result<()> {
    let config = planner.configuration().ok_or(PlannerError::NotConfigured)?;
    let assignment = parse::assignment(who, &config).map_err(|e| anyhow!(e))?;
    let next = planner.set(date, slot, assignment)?;
    report(planner, date, slot, next)
}

fn report(
    planner: &Planner<JsonStateRepository>,
    date: NaiveDate,
    slot: Slot,
    assignment: Assignment,
) -> Result<()> {
    let view = planner.week(date)?;
    println!(
        "{} {}: {}",
        date.format("%a %Y-%m-%d"),
        slot,
        render::paint(assignment, view.config.label(assignment))
    );
    println!("{}", view.totals.summary(&view.config));
    Ok(())
}
