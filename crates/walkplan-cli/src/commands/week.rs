use anyhow::Result;
use chrono::NaiveDate;
use walkplan_core::{Planner, Session};
use walkplan_infrastructure::JsonStateRepository;

use crate::render;

pub fn show(
    planner: &Planner<JsonStateRepository>,
    session: Session,
    today: NaiveDate,
) -> Result<()> {
    let view = planner.week(session.reference())?;
    print!("{}", render::render_week(&view, today));
    Ok(())
}

pub fn totals(planner: &Planner<JsonStateRepository>, session: Session) -> Result<()> {
    let view = planner.week(session.reference())?;
    println!("{}", view.window.title());
    println!("{}", view.totals.summary(&view.config));
    Ok(())
}

pub fn clear(planner: &Planner<JsonStateRepository>, session: Session) -> Result<()> {
    let window = planner.clear_week(session.reference())?;
    println!("🧹 Cleared {}", window.title());
    Ok(())
}
