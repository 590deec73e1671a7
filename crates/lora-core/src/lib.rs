//! Core types, appliance model, and errors for the LoRa-Connect mapping
//! generator.
//!
//! # Architecture
//!
//! The core consists of:
//! - The appliance description model, its loader and validator
//! - Strong domain types (`FeatureKey`)
//! - Error hierarchy distinguishing I/O, parse, and validation failures
//! - Generator configuration and CLI exit codes

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod appliance;
pub mod cli;
mod config;
mod error;
mod types;

pub use appliance::{Appliance, FeatureDescription};
pub use config::{GeneratorConfig, GeneratorVariant};
pub use error::{Error, Result};
pub use types::{FeatureKey, parse_decimal};
