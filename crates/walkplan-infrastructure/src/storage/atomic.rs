//! Shared primitives for atomic, locked file writes.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use super::StorageError;

/// Writes `bytes` to `path` atomically.
///
/// Creates the parent directory if needed, writes a sibling temp file,
/// fsyncs it, then renames it over the target.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut tmp_file = File::create(&tmp_path)?;
    tmp_file.write_all(bytes)?;

    // Ensure data is written to disk
    tmp_file.sync_all()?;
    drop(tmp_file);

    // Atomic rename
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Reads a file as text; `None` if it does not exist or is blank.
pub(crate) fn read_text(path: &Path) -> Result<Option<String>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(content))
}

/// Temp file path next to the target, e.g. `.state.json.tmp`.
pub(crate) fn temp_path(path: &Path) -> Result<PathBuf, StorageError> {
    let file_name = path.file_name().ok_or_else(|| {
        StorageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path has no file name",
        ))
    })?;

    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file itself stays on disk: unlinking it would let a waiter hold
/// the old inode while a newcomer locks a fresh one.
pub(crate) struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    /// Acquires an exclusive lock on `<path>.lock`, blocking until free.
    pub(crate) fn acquire(path: &Path) -> Result<Self, StorageError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| StorageError::LockError(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("state.json");
        write_atomic(&path, b"{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_path(&path).unwrap().exists());
    }

    #[test]
    fn test_read_text_missing_and_blank() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        assert!(read_text(&path).unwrap().is_none());
        fs::write(&path, "  \n").unwrap();
        assert!(read_text(&path).unwrap().is_none());
    }

    #[test]
    fn test_lock_file_kept_and_reacquirable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let lock_path = temp_dir.path().join("state.lock");
        {
            let _lock = FileLock::acquire(&path).unwrap();
            assert!(lock_path.exists());
        }
        // Released on drop, same inode reused by the next holder
        assert!(lock_path.exists());
        let _again = FileLock::acquire(&path).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_lock_excludes_other_handles_until_drop() {
        use fs2::FileExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        let lock = FileLock::acquire(&path).unwrap();

        let other = File::open(temp_dir.path().join("state.lock")).unwrap();
        assert!(other.try_lock_exclusive().is_err());
        drop(lock);
        assert!(other.try_lock_exclusive().is_ok());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let path = Path::new("/data/walkplan/state.json");
        assert_eq!(
            temp_path(path).unwrap(),
            PathBuf::from("/data/walkplan/.state.json.tmp")
        );
    }
}
