//! JSON state file storage.
//!
//! Returns the document as `serde_json::Value`; decoding into the planner
//! state (and repairing old shapes) is left to the repository layer.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;

use super::StorageError;
use super::atomic::{FileLock, read_text, write_atomic};

/// Indentation used when writing the state document.
const INDENT: &[u8] = b"    ";

/// The JSON state file.
///
/// Responsibilities:
/// - **File locking** (exclusive lock on `state.lock`, held only for the duration of a save)
/// - **Atomic write** (tmp file + fsync + rename)
/// - **Formatting** (full document, 4-space indented)
///
/// Does NOT:
/// - Know about day records or configuration
/// - Repair malformed data (delegated to the domain model)
pub struct StateFileStorage {
    path: PathBuf,
}

impl StateFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(JsonValue))`: Successfully parsed
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<JsonValue>, StorageError> {
        match read_text(&self.path)? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    /// Saves the whole document atomically under an exclusive lock.
    pub fn save(&self, data: &JsonValue) -> Result<(), StorageError> {
        let _lock = FileLock::acquire(&self.path)?;
        write_atomic(&self.path, &to_pretty_json(data)?)
    }
}

fn to_pretty_json(data: &JsonValue) -> Result<Vec<u8>, StorageError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StateFileStorage::new(temp_dir.path().join("data").join("state.json"));

        let data = json!({"2024-06-03": [[1, 0, 2]]});
        storage.save(&data).unwrap();

        assert_eq!(storage.load().unwrap(), Some(data));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StateFileStorage::new(temp_dir.path().join("nonexistent.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();
        let storage = StateFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StorageError::JsonError(_))));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let storage = StateFileStorage::new(path.clone());

        storage.save(&json!({"a": 1})).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn test_save_overwrites_and_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let storage = StateFileStorage::new(path.clone());

        storage.save(&json!({"a": 1})).unwrap();
        storage.save(&json!({"b": 2})).unwrap();

        assert_eq!(storage.load().unwrap(), Some(json!({"b": 2})));
        assert!(!temp_dir.path().join(".state.json.tmp").exists());
    }
}
