//! Convert command implementation.
//!
//! Reads the appliance description, generates `mapping.cpp` and writes it to
//! stdout, with the configuration lines on stderr. Generation finishes
//! before anything is written, so a failing run never leaves partial code
//! on stdout.

use anyhow::{Context, Result};
use lora_codegen::keygen::generate_lora_key;
use lora_codegen::{GeneratedOutput, MappingGenerator};
use lora_core::appliance;
use lora_core::cli::ExitCode;
use lora_core::{Error, GeneratorConfig};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Runs the converter against the process's stdout and stderr.
///
/// # Errors
///
/// Returns an error only if writing to stdout or stderr fails; problems with
/// the input are reported on stderr and turned into an exit code.
pub fn run(input: &Path, config: GeneratorConfig) -> Result<ExitCode> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(
        input,
        config,
        &mut OsRng,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}

/// Runs the converter with explicit output streams and randomness source.
///
/// On success the diagnostics go to `err` and the generated code to `out`.
/// On failure a single diagnostic line goes to `err`, `out` is left
/// untouched, and the returned exit code tells what went wrong.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
pub fn execute<R, O, E>(
    input: &Path,
    config: GeneratorConfig,
    rng: &mut R,
    out: &mut O,
    err: &mut E,
) -> Result<ExitCode>
where
    R: RngCore + CryptoRng,
    O: Write,
    E: Write,
{
    info!(
        "Converting {} ({} variant)",
        input.display(),
        config.variant
    );

    let generated = match generate(input, config, rng) {
        Ok(generated) => generated,
        Err(error) => {
            debug!("Conversion of {} failed: {error:?}", input.display());
            let written = if error.is_validation_error() {
                writeln!(err, "{error}")
            } else {
                writeln!(err, "Error: {error}")
            };
            written.context("failed to write diagnostics")?;
            return Ok(ExitCode::for_error(&error));
        }
    };

    err.write_all(generated.diagnostics.as_bytes())
        .and_then(|()| err.flush())
        .context("failed to write diagnostics")?;
    out.write_all(generated.code.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write generated code")?;

    info!("Generated {} bytes of mapping code", generated.code.len());
    Ok(ExitCode::SUCCESS)
}

fn generate<R>(
    input: &Path,
    config: GeneratorConfig,
    rng: &mut R,
) -> Result<GeneratedOutput, Error>
where
    R: RngCore + CryptoRng,
{
    let appliance = appliance::load_appliance(input)?;
    let lora_key = config.rotate_key.then(|| generate_lora_key(rng));
    let generator = MappingGenerator::new(config)?;
    generator.generate(&appliance, lora_key.as_ref())
}
