//! Command implementations for the converters.

pub mod convert;
