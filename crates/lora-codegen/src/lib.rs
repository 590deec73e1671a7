//! Code generation for the LoRa receiver firmware.
//!
//! Transforms a Home Connect appliance description into `mapping.cpp`
//! (`mapKey` and `mapIntValue`) using Handlebars templates, and generates
//! the shared LoRa encryption key.
//!
//! # Pipeline
//!
//! 1. [`tables::MappingTables`] derives the feature and value tables
//! 2. [`MappingGenerator`] renders them with the configured variant
//! 3. The caller writes [`GeneratedOutput::code`] and
//!    [`GeneratedOutput::diagnostics`] wherever they belong

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod keygen;
pub mod tables;
pub mod template_engine;
pub mod types;

pub use generator::MappingGenerator;
pub use types::GeneratedOutput;
