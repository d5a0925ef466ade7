//! ocrscrub - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use ocrscrub::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    ocrscrub::logging::init(cli.verbose);

    commands::clean::handle_clean(&cli.paths, cli.config.as_deref())
}
