//! CLI definitions for ocrscrub
//!
//! Kept in the library so tests can inspect the parser without spawning the
//! binary.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

/// Build clap styles for help output.
///
/// - Green: headers, usage, literals
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(name = "ocrscrub")]
#[command(about = "Clean OCR artifacts out of scanned literary source texts")]
#[command(
    long_about = "ocrscrub - Clean OCR artifacts out of scanned literary source texts.

Reads a raw text file, strips page numbers and stray noise letters, rewrites
capitalized section headers in title case, fixes known misread words, rejoins
hyphenated line breaks and normalizes whitespace.

USAGE:
    ocrscrub                         Clean the configured default paths
    ocrscrub raw.txt cleaned.txt     Clean raw.txt into cleaned.txt

Passing anything other than exactly two paths uses the defaults from
~/.config/ocrscrub/config.toml (or the built-in defaults)."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Input and output file (give both or neither)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
