//! Error types for the LoRa-Connect mapping generator.
//!
//! Every failure in the pipeline (reading the file, parsing JSON, parsing
//! numeric keys, validating the appliance list, rendering templates) is
//! reported through [`Error`], so callers can tell a broken input file apart
//! from an unsupported appliance.
//!
//! # Examples
//!
//! ```
//! use lora_core::{Error, Result};
//!
//! fn require_iv(iv: Option<&str>) -> Result<&str> {
//!     iv.ok_or_else(|| Error::ValidationError {
//!         field: "iv".to_string(),
//!         reason: "Only appliances using port 80 are supported at the moment".to_string(),
//!     })
//! }
//!
//! let err = require_iv(None).unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mapping generator.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// Path of the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when the configuration file is not valid JSON, does not have
    /// the expected shape, or when a template fails to render.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A feature key or value key is not a decimal integer in range.
    #[error("Invalid {context} '{value}': {source}")]
    InvalidNumber {
        /// What the number was supposed to be, e.g. "feature key"
        context: String,
        /// The offending text as found in the input
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The input is well-formed but describes something we cannot generate
    /// code for.
    #[error("{reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable diagnostic
        reason: String,
    },
}

impl Error {
    /// Returns `true` if this is an I/O error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lora_core::Error;
    ///
    /// let err = Error::Io {
    ///     path: "config.json".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    /// };
    /// assert!(err.is_io_error());
    /// ```
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the input could not be parsed.
    ///
    /// Covers malformed JSON as well as non-numeric keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use lora_core::Error;
    ///
    /// let err = Error::SerializationError {
    ///     message: "expected value".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_parse_error());
    /// ```
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::SerializationError { .. } | Self::InvalidNumber { .. }
        )
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use lora_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "appliances".to_string(),
    ///     reason: "Only one appliance is supported at the moment".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
