//! Lookup tables derived from an appliance description.
//!
//! The feature table maps every feature key to its display name; the value
//! table maps feature keys to their value enumerations and only holds
//! features that declare `values`. Both are ordered by key, which is the
//! order the generated switch statements list their cases in.
//!
//! # Examples
//!
//! ```
//! use lora_codegen::tables::MappingTables;
//! use lora_core::appliance::{parse_appliances, validate};
//! use lora_core::FeatureKey;
//!
//! let appliance = validate(parse_appliances(
//!     r#"[{"key": "K", "iv": "I", "features": {
//!         "2": {"name": "Temp"},
//!         "1": {"name": "Door", "values": {"0": "Off", "1": "Present", "2": "Confirmed"}}
//!     }}]"#,
//! ).unwrap()).unwrap();
//!
//! let tables = MappingTables::build(&appliance).unwrap();
//! assert_eq!(tables.features().len(), 2);
//! assert_eq!(tables.standard_error_keys(), vec![FeatureKey::new(1)]);
//! assert_eq!(tables.individual_value_keys().count(), 0);
//! ```

use lora_core::{Appliance, FeatureKey, Result, parse_decimal};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Value enumeration of a single feature, ordered by raw value.
pub type ValueNames = BTreeMap<i32, String>;

/// The built-in three-state error mapping, in declared order.
///
/// Features whose value enumeration equals this table share one branch in
/// the generated code.
pub const STANDARD_ERROR_MAP: [(i32, &str); 3] = [(0, "Off"), (1, "Present"), (2, "Confirmed")];

/// Returns `true` if `values` holds exactly the pairs of
/// [`STANDARD_ERROR_MAP`].
///
/// # Examples
///
/// ```
/// use lora_codegen::tables::{ValueNames, is_standard_error_map};
///
/// let mut values = ValueNames::new();
/// values.insert(2, "Confirmed".to_string());
/// values.insert(0, "Off".to_string());
/// values.insert(1, "Present".to_string());
/// assert!(is_standard_error_map(&values));
///
/// values.insert(3, "Unknown".to_string());
/// assert!(!is_standard_error_map(&values));
/// ```
#[must_use]
pub fn is_standard_error_map(values: &ValueNames) -> bool {
    values.len() == STANDARD_ERROR_MAP.len()
        && STANDARD_ERROR_MAP
            .iter()
            .all(|(value, name)| values.get(value).is_some_and(|n| n == name))
}

/// Feature table and value table of one appliance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTables {
    features: BTreeMap<FeatureKey, String>,
    values: BTreeMap<FeatureKey, ValueNames>,
}

impl MappingTables {
    /// Builds both tables from the appliance's features.
    ///
    /// Features are visited in source order. A key that appears twice
    /// overwrites the earlier entry in each table it is written to.
    ///
    /// # Errors
    ///
    /// Returns [`lora_core::Error::InvalidNumber`] if a feature key or value
    /// key is not a decimal integer in range.
    pub fn build(appliance: &Appliance) -> Result<Self> {
        let mut tables = Self::default();

        for (raw_key, description) in &appliance.features {
            let key: FeatureKey = raw_key.parse()?;

            if let Some(previous) = tables.features.insert(key, description.name.clone()) {
                warn!(
                    "Feature {key} is defined more than once, replacing '{previous}' with '{}'",
                    description.name
                );
            }

            if let Some(values) = &description.values {
                let mut names = ValueNames::new();
                for (raw_value, name) in values {
                    let value: i32 = parse_decimal(raw_value, "value key")?;
                    if names.insert(value, name.clone()).is_some() {
                        warn!("Value {value} of feature {key} is defined more than once");
                    }
                }
                tables.values.insert(key, names);
            }
        }

        debug!(
            "Built mapping tables: {} features, {} with values",
            tables.features.len(),
            tables.values.len()
        );

        Ok(tables)
    }

    /// Feature key to display name, ascending by key.
    #[must_use]
    pub const fn features(&self) -> &BTreeMap<FeatureKey, String> {
        &self.features
    }

    /// Feature key to value enumeration, ascending by key.
    #[must_use]
    pub const fn values(&self) -> &BTreeMap<FeatureKey, ValueNames> {
        &self.values
    }

    /// Keys of features whose values equal [`STANDARD_ERROR_MAP`], ascending.
    #[must_use]
    pub fn standard_error_keys(&self) -> Vec<FeatureKey> {
        self.values
            .iter()
            .filter(|(_, values)| is_standard_error_map(values))
            .map(|(key, _)| *key)
            .collect()
    }

    /// Features with their own value enumeration, ascending by key.
    pub fn individual_value_keys(&self) -> impl Iterator<Item = (FeatureKey, &ValueNames)> {
        self.values
            .iter()
            .filter(|(_, values)| !is_standard_error_map(values))
            .map(|(key, values)| (*key, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lora_core::appliance::parse_appliances;

    fn tables_for(features: &str) -> Result<MappingTables> {
        let json = format!(r#"[{{"key": "K", "iv": "I", "features": {features}}}]"#);
        let appliances = parse_appliances(&json)?;
        MappingTables::build(&appliances[0])
    }

    #[test]
    fn test_feature_table_is_sorted_numerically() {
        let tables = tables_for(
            r#"{"100": {"name": "C"}, "9": {"name": "A"}, "10": {"name": "B"}}"#,
        )
        .unwrap();

        let keys: Vec<u16> = tables.features().keys().map(|k| k.get()).collect();
        assert_eq!(keys, vec![9, 10, 100]);
        assert!(tables.values().is_empty());
    }

    #[test]
    fn test_value_table_only_holds_features_with_values() {
        let tables = tables_for(
            r#"{"1": {"name": "Door", "values": {"1": "Open", "0": "Closed"}}, "2": {"name": "Temp"}}"#,
        )
        .unwrap();

        assert_eq!(tables.features().len(), 2);
        assert_eq!(tables.values().len(), 1);

        let door = &tables.values()[&FeatureKey::new(1)];
        let entries: Vec<(i32, &str)> = door.iter().map(|(v, n)| (*v, n.as_str())).collect();
        assert_eq!(entries, vec![(0, "Closed"), (1, "Open")]);
    }

    #[test]
    fn test_negative_value_keys() {
        let tables =
            tables_for(r#"{"5": {"name": "Level", "values": {"-1": "Low", "1": "High"}}}"#).unwrap();
        let level = &tables.values()[&FeatureKey::new(5)];
        assert_eq!(level.keys().copied().collect::<Vec<_>>(), vec![-1, 1]);
    }

    #[test]
    fn test_duplicate_feature_key_last_wins() {
        let tables =
            tables_for(r#"{"1": {"name": "First"}, "01": {"name": "Second"}}"#).unwrap();
        assert_eq!(tables.features().len(), 1);
        assert_eq!(tables.features()[&FeatureKey::new(1)], "Second");
    }

    #[test]
    fn test_non_numeric_feature_key_fails() {
        let err = tables_for(r#"{"door": {"name": "Door"}}"#).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("door"));
    }

    #[test]
    fn test_non_numeric_value_key_fails() {
        let err = tables_for(r#"{"1": {"name": "Door", "values": {"open": "Open"}}}"#).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("value key"));
    }

    #[test]
    fn test_out_of_range_feature_key_fails() {
        let err = tables_for(r#"{"70000": {"name": "Big"}}"#).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_standard_error_grouping() {
        let tables = tables_for(
            r#"{
                "7": {"name": "B", "values": {"2": "Confirmed", "1": "Present", "0": "Off"}},
                "3": {"name": "A", "values": {"0": "Off", "1": "Present", "2": "Confirmed"}},
                "5": {"name": "C", "values": {"0": "Off", "1": "Present"}},
                "4": {"name": "D", "values": {"0": "Off", "1": "On", "2": "Confirmed"}}
            }"#,
        )
        .unwrap();

        assert_eq!(
            tables.standard_error_keys(),
            vec![FeatureKey::new(3), FeatureKey::new(7)]
        );

        let individual: Vec<u16> = tables
            .individual_value_keys()
            .map(|(key, _)| key.get())
            .collect();
        assert_eq!(individual, vec![4, 5]);
    }

    #[test]
    fn test_empty_features() {
        let tables = tables_for("{}").unwrap();
        assert!(tables.features().is_empty());
        assert!(tables.standard_error_keys().is_empty());
    }
}
