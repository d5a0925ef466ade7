//! File helpers for cleanup jobs.

pub mod backup;
pub mod io;

pub use backup::{backup_path_for, create_backup};
pub use io::{read_source, write_output};
