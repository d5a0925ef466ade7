//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub corrections: CorrectionsConfig,
}

/// Default source and destination, used when the command line does not
/// name both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_input_path")]
    pub input: PathBuf,
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

pub fn default_input_path() -> PathBuf {
    PathBuf::from("attar-conference-of-birds/raw.txt")
}

pub fn default_output_path() -> PathBuf {
    PathBuf::from("attar-conference-of-birds/cleaned.txt")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            output: default_output_path(),
        }
    }
}

/// How the cleaned file is written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write to a temp file next to the output, then rename over it
    #[serde(default = "default_atomic")]
    pub atomic: bool,
    /// Keep a `.bak` copy of an output file that is about to be replaced
    #[serde(default)]
    pub backup: bool,
}

pub fn default_atomic() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            atomic: default_atomic(),
            backup: false,
        }
    }
}

/// Source-specific corrections appended to the built-in table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectionsConfig {
    #[serde(default)]
    pub extra: Vec<Correction>,
}

impl CorrectionsConfig {
    /// Extra corrections as `(from, to)` pairs, in configured order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.extra
            .iter()
            .map(|c| (c.from.clone(), c.to.clone()))
            .collect()
    }
}

/// A single literal replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    pub from: String,
    pub to: String,
}
