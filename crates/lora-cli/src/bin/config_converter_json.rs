//! `config-converter-json`: generates `mapping.cpp` with a `mapIntValue`
//! that writes into an ArduinoJson object. The LoRa key is left alone.
//!
//! # Examples
//!
//! ```bash
//! config-converter-json appliance.json > receiver/mapping.cpp
//! ```

use anyhow::Result;
use lora_cli::Cli;
use lora_cli::commands::convert;
use lora_cli::logging::init_logging;
use lora_core::GeneratorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse_named("config-converter-json");

    init_logging()?;

    let exit_code = convert::run(&cli.input, GeneratorConfig::json_mapping())?;

    std::process::exit(exit_code.as_i32());
}
