//! Command-line arguments shared by both converters.

use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;

/// Converts a Home Connect appliance description into LoRa receiver
/// mapping code.
///
/// Generated code is written to stdout, the lines to copy into the
/// `config.h` files are written to stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Appliance description file (JSON) as exported for the appliance
    pub input: PathBuf,
}

impl Cli {
    /// Parses the process arguments, reporting usage under `bin_name`.
    ///
    /// Exits the process with clap's usage error code if the arguments are
    /// invalid, or after printing `--help`/`--version`.
    #[must_use]
    pub fn parse_named(bin_name: &'static str) -> Self {
        let matches = Self::command().name(bin_name).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}
