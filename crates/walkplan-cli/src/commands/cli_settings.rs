use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkplan_infrastructure::AppSettings;

pub fn run(
    current: &AppSettings,
    path: PathBuf,
    state_file: Option<PathBuf>,
    log_level: Option<&str>,
) -> Result<()> {
    if state_file.is_none() && log_level.is_none() {
        print_settings(current, &path);
        return Ok(());
    }

    let updated = current.with_changes(state_file, log_level);
    updated
        .save_to(path.clone())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✅ Settings saved");
    print_settings(&updated, &path);
    Ok(())
}

fn print_settings(settings: &AppSettings, path: &Path) {
    println!("Settings file: {}", path.display());
    match settings.resolve_state_file() {
        Ok(state_file) => println!("State file:    {}", state_file.display()),
        Err(e) => println!("State file:    ({})", e),
    }
    println!(
        "Log level:     {}",
        settings.log_level.as_deref().unwrap_or("(default)")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_updates_are_written_to_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        let state_file = temp_dir.path().join("walks.json");

        run(
            &AppSettings::default(),
            path.clone(),
            Some(state_file.clone()),
            Some("info"),
        )
        .unwrap();

        let saved = AppSettings::load_from(path).unwrap();
        assert_eq!(saved.state_file, Some(state_file));
        assert_eq!(saved.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_show_only_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        run(&AppSettings::default(), path.clone(), None, None).unwrap();
        assert!(!path.exists());
    }
}
