//! `config-converter`: generates `mapping.cpp` with the string-returning
//! `mapIntValue` and rotates the LoRa encryption key.
//!
//! # Examples
//!
//! ```bash
//! config-converter appliance.json > receiver/mapping.cpp
//! ```

use anyhow::Result;
use lora_cli::Cli;
use lora_cli::commands::convert;
use lora_cli::logging::init_logging;
use lora_core::GeneratorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse_named("config-converter");

    init_logging()?;

    let exit_code = convert::run(&cli.input, GeneratorConfig::string_mapping())?;

    std::process::exit(exit_code.as_i32());
}
