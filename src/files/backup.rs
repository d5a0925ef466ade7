//! Backup of an output file before it is overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CleanError;

/// Get the backup path for a given file.
///
/// The backup path is the original path with `.bak` appended.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    PathBuf::from(backup)
}

/// Create a backup of the given file if one doesn't already exist.
///
/// Returns `Ok(true)` if a new backup was created, `Ok(false)` if one already
/// existed or there was nothing to back up.
pub fn create_backup(path: &Path) -> Result<bool, CleanError> {
    if !path.exists() {
        return Ok(false);
    }

    let backup = backup_path_for(path);
    if backup.exists() {
        debug!(backup = %backup.display(), "backup already present");
        return Ok(false);
    }

    fs::copy(path, &backup).map_err(|source| CleanError::Backup {
        path: backup.clone(),
        source,
    })?;
    debug!(backup = %backup.display(), "created backup");
    Ok(true)
}
