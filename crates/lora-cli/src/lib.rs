//! LoRa-Connect converter library.
//!
//! Backs the `config-converter` and `config-converter-json` binaries and
//! exposes their pieces for testing.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::Cli;
