//! A single cleanup run: read the source, clean it, write the result.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::cleaner::Cleaner;
use crate::config::{OutputConfig, PathsConfig};
use crate::error::CleanError;
use crate::files;

/// Which file to clean and where to put the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Outcome of a completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    /// Whether an existing output was copied to `<output>.bak` first.
    pub backed_up: bool,
}

impl CleanJob {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Build a job from positional arguments.
    ///
    /// Exactly two paths are used as input and output. Any other count,
    /// including one, falls back to the configured defaults.
    pub fn from_args(paths: &[PathBuf], defaults: &PathsConfig) -> Self {
        match paths {
            [input, output] => Self::new(input, output),
            _ => {
                debug!(
                    given = paths.len(),
                    "not exactly two paths, using configured defaults"
                );
                Self::new(&defaults.input, &defaults.output)
            }
        }
    }

    /// Read, clean and write.
    pub fn run(
        &self,
        cleaner: &mut Cleaner,
        output: &OutputConfig,
    ) -> Result<CleanReport, CleanError> {
        let raw = files::read_source(&self.input_path)?;
        let cleaned = cleaner.clean(&raw);

        let backed_up = if output.backup {
            files::create_backup(&self.output_path)?
        } else {
            false
        };

        files::write_output(&self.output_path, &cleaned, output.atomic)?;

        info!(
            input = %self.input_path.display(),
            output = %self.output_path.display(),
            bytes_read = raw.len(),
            bytes_written = cleaned.len(),
            "cleaned source text"
        );

        Ok(CleanReport {
            input_path: self.input_path.clone(),
            output_path: self.output_path.clone(),
            bytes_read: raw.len(),
            bytes_written: cleaned.len(),
            backed_up,
        })
    }
}

impl CleanReport {
    /// One-line confirmation printed after a successful run.
    pub fn summary(&self) -> String {
        format!(
            "Cleaned {} -> {}",
            self.input_path.display(),
            self.output_path.display()
        )
    }
}
