use anyhow::{Context, Result};
use walkplan_core::{Configuration, FirstDayOfWeek, Planner, PlannerError};
use walkplan_infrastructure::JsonStateRepository;

pub fn setup(
    planner: &Planner<JsonStateRepository>,
    user_a: &str,
    user_b: &str,
    first_day: FirstDayOfWeek,
) -> Result<()> {
    let config = Configuration::new(user_a, user_b, first_day)?;
    planner
        .complete_setup(config.clone())
        .context("Setup failed")?;

    println!("✅ Planner ready: {} and {}", config.user_a(), config.user_b());
    println!("   Weeks start on {}", config.first_day_of_week());
    println!("   State file: {}", planner.repository().path().display());
    Ok(())
}

pub fn settings(
    planner: &Planner<JsonStateRepository>,
    user_a: Option<&str>,
    user_b: Option<&str>,
    first_day: Option<FirstDayOfWeek>,
) -> Result<()> {
    let current = planner.configuration().ok_or(PlannerError::NotConfigured)?;

    if user_a.is_none() && user_b.is_none() && first_day.is_none() {
        print_settings(&current);
        return Ok(());
    }

    let updated = current.with_changes(user_a, user_b, first_day)?;
    planner.update_settings(updated.clone())?;
    println!("✅ Settings updated");
    print_settings(&updated);
    Ok(())
}

fn print_settings(config: &Configuration) {
    println!("User A:            {}", config.user_a());
    println!("User B:            {}", config.user_b());
    println!("First day of week: {}", config.first_day_of_week());
}
