//! TOML settings file with atomic writes.

use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};

use super::StorageError;
use super::atomic::{FileLock, read_text, write_atomic};

/// A handle to a TOML settings file.
///
/// Loads are plain reads; saves take the exclusive lock and go through a
/// temp file + rename, so readers never see a half-written file.
pub struct SettingsFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> SettingsFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    /// Loads and deserializes the file; `Ok(None)` if missing or empty.
    pub fn load(&self) -> Result<Option<T>, StorageError> {
        match read_text(&self.path)? {
            Some(content) => Ok(Some(toml::from_str(&content)?)),
            None => Ok(None),
        }
    }

    /// Saves data to the file atomically.
    pub fn save(&self, data: &T) -> Result<(), StorageError> {
        let toml_string = toml::to_string_pretty(data)?;
        let _lock = FileLock::acquire(&self.path)?;
        write_atomic(&self.path, toml_string.as_bytes())
    }
}
