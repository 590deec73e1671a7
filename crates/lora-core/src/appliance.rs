//! Appliance description model, loader, and validator.
//!
//! The input is the JSON file exported for a Home Connect appliance: an array
//! of appliance records, each with the appliance key material and a map of
//! numerically keyed features.
//!
//! ```json
//! [{
//!   "key": "...",
//!   "iv": "...",
//!   "features": {
//!     "539": {"name": "BSH.Common.Setting.PowerState", "values": {"2": "On", "3": "Standby"}}
//!   }
//! }]
//! ```
//!
//! Objects keep their source order, so when a key shows up twice the later
//! entry wins, as it does in any JSON reader that fills a dictionary.
//!
//! # Examples
//!
//! ```
//! use lora_core::appliance::{parse_appliances, validate};
//!
//! let appliances = parse_appliances(
//!     r#"[{"key": "K", "iv": "I", "features": {"1": {"name": "Door"}}}]"#,
//! ).unwrap();
//! let appliance = validate(appliances).unwrap();
//! assert_eq!(appliance.features.len(), 1);
//! assert!(appliance.supports_port_80());
//! ```

use crate::{Error, Result};
use secrecy::SecretString;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

/// Diagnostic for an input file describing more than one appliance.
pub const MULTIPLE_APPLIANCES: &str = "Only one appliance is supported at the moment";

/// Diagnostic for an input file with an empty appliance list.
pub const NO_APPLIANCE: &str = "No appliance found in the configuration file";

/// Diagnostic for an appliance that does not speak the port-80 protocol.
pub const PORT_80_ONLY: &str = "Only appliances using port 80 are supported at the moment";

/// A single appliance as described by the configuration file.
///
/// Key material is kept in [`SecretString`] so it never leaks through
/// `Debug` output or logs.
#[derive(Debug, Deserialize)]
pub struct Appliance {
    /// Appliance key material, opaque to us
    #[serde(deserialize_with = "secret_string")]
    pub key: SecretString,

    /// Initialization vector, only present on port-80 appliances.
    ///
    /// An explicit `null` reads as absent: there is no IV to report.
    #[serde(default, deserialize_with = "optional_secret_string")]
    pub iv: Option<SecretString>,

    /// Features keyed by decimal feature id, in source order
    #[serde(deserialize_with = "ordered_entries")]
    pub features: Vec<(String, FeatureDescription)>,
}

impl Appliance {
    /// Returns `true` if the appliance uses the port-80 protocol variant.
    #[must_use]
    pub const fn supports_port_80(&self) -> bool {
        self.iv.is_some()
    }
}

/// Description of one appliance feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureDescription {
    /// Display name of the feature
    pub name: String,

    /// Display strings for raw values, keyed by decimal value, in source order
    #[serde(default, deserialize_with = "optional_ordered_entries")]
    pub values: Option<Vec<(String, String)>>,
}

/// Reads and parses the configuration file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::SerializationError`] if it is not a JSON array of appliances.
pub fn load_appliances(path: impl AsRef<Path>) -> Result<Vec<Appliance>> {
    let path = path.as_ref();
    debug!("Reading appliance configuration from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_appliances(&content)
}

/// Parses the JSON text of a configuration file.
///
/// # Errors
///
/// Returns [`Error::SerializationError`] if the text is not valid JSON, is
/// not an array, or an appliance lacks `key`, `features`, or a feature
/// `name`.
pub fn parse_appliances(content: &str) -> Result<Vec<Appliance>> {
    serde_json::from_str(content).map_err(|e| Error::SerializationError {
        message: format!("Invalid appliance configuration: {e}"),
        source: Some(e),
    })
}

/// Checks that the list holds exactly one port-80 appliance and returns it.
///
/// # Errors
///
/// Returns [`Error::ValidationError`] if the list is empty, holds more than
/// one appliance, or the appliance has no `iv`.
///
/// # Examples
///
/// ```
/// use lora_core::appliance::{parse_appliances, validate, PORT_80_ONLY};
///
/// let appliances = parse_appliances(r#"[{"key": "K", "features": {}}]"#).unwrap();
/// let err = validate(appliances).unwrap_err();
/// assert_eq!(err.to_string(), PORT_80_ONLY);
/// ```
pub fn validate(appliances: Vec<Appliance>) -> Result<Appliance> {
    if appliances.len() > 1 {
        return Err(Error::ValidationError {
            field: "appliances".to_string(),
            reason: MULTIPLE_APPLIANCES.to_string(),
        });
    }

    let Some(appliance) = appliances.into_iter().next() else {
        return Err(Error::ValidationError {
            field: "appliances".to_string(),
            reason: NO_APPLIANCE.to_string(),
        });
    };

    if !appliance.supports_port_80() {
        return Err(Error::ValidationError {
            field: "iv".to_string(),
            reason: PORT_80_ONLY.to_string(),
        });
    }

    debug!(
        "Validated appliance with {} features",
        appliance.features.len()
    );
    Ok(appliance)
}

/// Loads the configuration file and validates it in one step.
///
/// # Errors
///
/// Returns any error of [`load_appliances`] or [`validate`].
pub fn load_appliance(path: impl AsRef<Path>) -> Result<Appliance> {
    validate(load_appliances(path)?)
}

fn secret_string<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

fn optional_secret_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

/// Deserializes a JSON object into its entries, preserving source order and
/// duplicates.
fn ordered_entries<'de, D, V>(deserializer: D) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V> Visitor<'de> for EntriesVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, V>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

fn optional_ordered_entries<'de, D, V>(
    deserializer: D,
) -> std::result::Result<Option<Vec<(String, V)>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    ordered_entries(deserializer).map(Some)
}
