//! Clean command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;

use ocrscrub::files::backup_path_for;
use ocrscrub::{CleanJob, Cleaner, Config};

/// Load the config named on the command line, or the default one.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Clean one file and print the confirmation line.
#[cfg(not(tarpaulin_include))]
pub fn handle_clean(paths: &[PathBuf], config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let job = CleanJob::from_args(paths, &config.paths);
    let mut cleaner = Cleaner::from_config(&config);

    let report = job.run(&mut cleaner, &config.output)?;

    println!("{}", report.summary());
    if report.backed_up {
        println!(
            "Previous output saved to {}",
            backup_path_for(&report.output_path).display()
        );
    }

    Ok(())
}
