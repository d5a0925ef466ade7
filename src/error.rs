//! Errors at the file boundary.
//!
//! The cleanup itself cannot fail; everything here comes from reading the
//! source or writing the result.

use std::path::PathBuf;

/// Errors that can occur while running a cleanup job.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("Failed to read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input file is not valid UTF-8: {}", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("Failed to create backup {}: {source}", path.display())]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}
