//! Reading source texts and writing cleaned output.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CleanError;

/// Read a UTF-8 source file.
pub fn read_source(path: &Path) -> Result<String, CleanError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            CleanError::InvalidUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            CleanError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Write `contents` to `path`.
///
/// With `atomic`, writes a uniquely named temp file next to `path` and
/// persists it over the target, so a failed write never leaves a truncated
/// output behind and never touches any other file in the directory.
pub fn write_output(path: &Path, contents: &str, atomic: bool) -> Result<(), CleanError> {
    let write_err = |source: std::io::Error| CleanError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if !atomic {
        return fs::write(path, contents).map_err(write_err);
    }

    // Same directory keeps the final rename on one filesystem
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(contents.as_bytes()).map_err(write_err)?;

    // Keep the mode of the file being replaced
    if let Some(existing) = fs::metadata(path).ok().filter(|meta| meta.is_file()) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }

    // On failure the temp file is dropped with the error, which deletes it
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
