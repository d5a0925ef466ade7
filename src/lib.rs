//! ocrscrub Library
//!
//! Cleanup of OCR-scanned literary source texts: page numbers, noise
//! letters, capitalized headers, misread words and whitespace.

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod job;
pub mod logging;

pub use cleaner::{clean, Cleaner};
pub use config::Config;
pub use error::CleanError;
pub use job::{CleanJob, CleanReport};
