//! Strong domain types for the mapping generator.
//!
//! Feature keys are 16-bit on the wire (`uint16_t key` in the firmware), raw
//! values are signed 32-bit (`int32_t value`). Keeping the key in a newtype
//! stops it from being mixed up with a raw value when building tables.
//!
//! # Examples
//!
//! ```
//! use lora_core::FeatureKey;
//!
//! let key: FeatureKey = "539".parse().unwrap();
//! assert_eq!(key.get(), 539);
//! assert_eq!(key.to_string(), "539");
//! ```

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Feature key (newtype over `u16`).
///
/// Identifies a feature (sensor, status bit, setting) reported by the
/// appliance. Ordering is numeric, which is the order keys are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeatureKey(u16);

impl FeatureKey {
    /// Creates a feature key from its numeric value.
    #[inline]
    #[must_use]
    pub const fn new(key: u16) -> Self {
        Self(key)
    }

    /// Returns the numeric value of the key.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for FeatureKey {
    fn from(key: u16) -> Self {
        Self(key)
    }
}

impl FromStr for FeatureKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_decimal(s, "feature key").map(Self)
    }
}

/// Parses a decimal integer as found in the keys of the configuration file.
///
/// Surrounding whitespace is ignored, an optional sign and leading zeros are
/// accepted. Anything else, including values that do not fit into `T`, is
/// reported as [`Error::InvalidNumber`] tagged with `context`.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] if `text` is not a decimal integer that
/// fits into `T`.
///
/// # Examples
///
/// ```
/// use lora_core::parse_decimal;
///
/// let value: i32 = parse_decimal(" -007 ", "value key").unwrap();
/// assert_eq!(value, -7);
///
/// let err = parse_decimal::<i32>("0x10", "value key").unwrap_err();
/// assert!(err.is_parse_error());
/// ```
pub fn parse_decimal<T>(text: &str, context: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    text.trim().parse().map_err(|source| Error::InvalidNumber {
        context: context.to_string(),
        value: text.to_string(),
        source,
    })
}
