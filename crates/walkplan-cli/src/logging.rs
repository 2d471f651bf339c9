//! Tracing subscriber setup.
//!
//! Filter precedence: `RUST_LOG`, then `--verbose`, then `log_level` from
//! settings.toml, then `warn`. Logs go to stderr so the week grid on stdout
//! stays clean.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init(verbose: bool, settings_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directive(verbose, settings_level)));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn fallback_directive(verbose: bool, settings_level: Option<&str>) -> &str {
    if verbose {
        return "debug";
    }
    match settings_level.map(str::trim) {
        Some(level) if !level.is_empty() => level,
        _ => DEFAULT_FILTER,
    }
}
