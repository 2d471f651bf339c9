use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use walkplan_core::{FirstDayOfWeek, Planner, PlannerError, Session, Slot};
use walkplan_infrastructure::{AppSettings, JsonStateRepository};

mod commands;
mod logging;
mod parse;
mod render;

#[derive(Parser)]
#[command(name = "walkplan")]
#[command(about = "Walkplan - shared weekly dog-walk planner", long_about = None)]
struct Cli {
    /// Path to the JSON state file (overrides settings.toml)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Path to settings.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Selects a week relative to a reference date.
#[derive(Args, Debug, Clone, Copy)]
struct WeekArgs {
    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse::date)]
    date: Option<NaiveDate>,

    /// Move this many weeks forward (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    weeks: i64,
}

impl WeekArgs {
    fn session(&self, today: NaiveDate) -> Result<Session> {
        let mut session = Session::new(self.date.unwrap_or(today));
        session
            .shift_week(self.weeks)
            .with_context(|| format!("Cannot move {} weeks", self.weeks))?;
        Ok(session)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// First-run setup: name the two users and pick the first day of the week
    Setup {
        #[arg(long, default_value = walkplan_core::config::DEFAULT_USER_A)]
        user_a: String,
        #[arg(long, default_value = walkplan_core::config::DEFAULT_USER_B)]
        user_b: String,
        #[arg(long, default_value = "Sunday", value_parser = parse::first_day)]
        first_day: FirstDayOfWeek,
    },
    /// Show or update the planner settings
    Settings {
        #[arg(long)]
        user_a: Option<String>,
        #[arg(long)]
        user_b: Option<String>,
        #[arg(long, value_parser = parse::first_day)]
        first_day: Option<FirstDayOfWeek>,
    },
    /// Show the week grid
    Show {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Cycle one slot: unassigned -> user A -> user B -> both -> unassigned
    Toggle {
        #[arg(value_parser = parse::date)]
        date: NaiveDate,
        /// morning, afternoon, evening (or 0, 1, 2)
        #[arg(value_parser = parse::slot)]
        slot: Slot,
    },
    /// Assign one slot directly
    Set {
        #[arg(value_parser = parse::date)]
        date: NaiveDate,
        /// morning, afternoon, evening (or 0, 1, 2)
        #[arg(value_parser = parse::slot)]
        slot: Slot,
        /// none, a, b, both, a user name, or 0..3
        who: String,
    },
    /// Print the walk totals of a week
    Totals {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Unassign every slot of a week
    Clear {
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Show or update settings.toml (state file location, log level)
    #[command(name = "cli-settings")]
    CliSettings {
        /// State file to use from now on
        #[arg(long)]
        data_file: Option<PathBuf>,
        /// Log filter used when RUST_LOG is unset; an empty value removes it
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e
                .downcast_ref::<PlannerError>()
                .is_some_and(PlannerError::is_not_configured)
            {
                eprintln!(
                    "{}",
                    "No planner configuration found. Run `walkplan setup` first.".yellow()
                );
            } else {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = match cli.settings {
        Some(path) => path,
        None => AppSettings::default_path()?,
    };
    let settings =
        AppSettings::load_from(settings_path.clone()).context("Failed to load settings")?;

    logging::init(cli.verbose, settings.log_level.as_deref());

    let open_planner = || -> Result<Planner<JsonStateRepository>> {
        let state_file = match &cli.state_file {
            Some(path) => path.clone(),
            None => settings.resolve_state_file()?,
        };
        tracing::debug!("Using state file {}", state_file.display());
        Ok(Planner::new(JsonStateRepository::with_path(state_file)))
    };
    let today = Session::today().reference();

    match cli.command {
        Commands::CliSettings {
            data_file,
            log_level,
        } => commands::cli_settings::run(&settings, settings_path, data_file, log_level.as_deref()),
        Commands::Setup {
            user_a,
            user_b,
            first_day,
        } => commands::setup::setup(&open_planner()?, &user_a, &user_b, first_day),
        Commands::Settings {
            user_a,
            user_b,
            first_day,
        } => commands::setup::settings(
            &open_planner()?,
            user_a.as_deref(),
            user_b.as_deref(),
            first_day,
        ),
        Commands::Show { week } => {
            commands::week::show(&open_planner()?, week.session(today)?, today)
        }
        Commands::Totals { week } => {
            commands::week::totals(&open_planner()?, week.session(today)?)
        }
        Commands::Clear { week } => commands::week::clear(&open_planner()?, week.session(today)?),
        Commands::Toggle { date, slot } => commands::slot::toggle(&open_planner()?, date, slot),
        Commands::Set { date, slot, who } => {
            commands::slot::set(&open_planner()?, date, slot, &who)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_args_shift_from_date() {
        let args = WeekArgs {
            date: Some(date(2024, 6, 5)),
            weeks: -1,
        };
        let session = args.session(date(2030, 1, 1)).unwrap();
        assert_eq!(session.reference(), date(2024, 5, 29));
    }

    #[test]
    fn test_week_args_huge_shift_is_error() {
        let args = WeekArgs {
            date: None,
            weeks: 100_000_000,
        };
        let err = args.session(date(2024, 6, 5)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlannerError>(),
            Some(PlannerError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_cli_settings_command_parses() {
        let cli = Cli::try_parse_from([
            "walkplan",
            "cli-settings",
            "--data-file",
            "/tmp/walks.json",
            "--log-level",
            "info",
        ])
        .unwrap();
        match cli.command {
            Commands::CliSettings {
                data_file,
                log_level,
            } => {
                assert_eq!(data_file, Some(PathBuf::from("/tmp/walks.json")));
                assert_eq!(log_level.as_deref(), Some("info"));
            }
            _ => panic!("expected cli-settings"),
        }
    }

    #[test]
    fn test_cli_parses_negative_weeks() {
        let cli = Cli::try_parse_from(["walkplan", "show", "--weeks", "-2"]).unwrap();
        match cli.command {
            Commands::Show { week } => assert_eq!(week.weeks, -2),
            _ => panic!("expected show"),
        }
    }
}
