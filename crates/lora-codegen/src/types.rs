//! Types for code generation.
//!
//! [`GeneratedOutput`] is what the generator hands back to the caller; the
//! context types are the data the Handlebars templates are rendered with.

use lora_core::FeatureKey;
use serde::Serialize;

/// Result of one generator run.
///
/// Nothing is written anywhere: the caller decides where `code` and
/// `diagnostics` go (stdout and stderr for the binaries).
///
/// # Examples
///
/// ```
/// use lora_codegen::GeneratedOutput;
///
/// let output = GeneratedOutput {
///     code: "String mapKey(uint16_t key) { ... }".to_string(),
///     diagnostics: String::new(),
/// };
/// assert!(output.code.contains("mapKey"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    /// Generated `mapping.cpp` source
    pub code: String,
    /// Configuration lines for the user (may contain key material)
    pub diagnostics: String,
}

/// Context for the `mapping/map_key` template.
#[derive(Debug, Serialize)]
pub struct MapKeyContext<'a> {
    /// Tool name written into the banner
    pub generator_name: &'a str,
    /// Header to include
    pub include_header: &'a str,
    /// All features, ascending by key
    pub features: Vec<FeatureEntry<'a>>,
}

/// One `case` of `mapKey`.
#[derive(Debug, Serialize)]
pub struct FeatureEntry<'a> {
    /// Feature key
    pub key: FeatureKey,
    /// Display name
    pub name: &'a str,
}

/// Context for the `mapping/string` and `mapping/json` templates.
#[derive(Debug, Serialize)]
pub struct ValueMappingContext<'a> {
    /// Features sharing the standard error branch, ascending
    pub standard_error_keys: Vec<FeatureKey>,
    /// Cases of the standard error branch, in declared order
    pub standard_error_values: Vec<ValueEntry<'a>>,
    /// Features with their own branch, ascending by key
    pub value_features: Vec<ValueFeature<'a>>,
}

/// A feature with its own `switch (value)` branch.
#[derive(Debug, Serialize)]
pub struct ValueFeature<'a> {
    /// Feature key
    pub key: FeatureKey,
    /// Value cases, ascending by value
    pub values: Vec<ValueEntry<'a>>,
}

/// One `case` of a `switch (value)`.
#[derive(Debug, Serialize)]
pub struct ValueEntry<'a> {
    /// Raw value
    pub value: i32,
    /// Display string
    pub name: &'a str,
}

/// Context for the `diagnostics/appliance` template.
#[derive(Debug, Serialize)]
pub struct ApplianceContext<'a> {
    /// Appliance key, exposed for printing
    pub appliance_key: &'a str,
    /// Appliance IV, exposed for printing
    pub appliance_iv: &'a str,
}

/// Context for the `diagnostics/lora_key` template.
#[derive(Debug, Serialize)]
pub struct LoraKeyContext<'a> {
    /// Freshly generated LoRa key, exposed for printing
    pub lora_key: &'a str,
}
