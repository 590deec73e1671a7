//! Mapping code generator.
//!
//! Turns a validated appliance into the `mapping.cpp` source for the LoRa
//! receiver firmware, plus the configuration lines the user copies into the
//! `config.h` files.
//!
//! # Examples
//!
//! ```
//! use lora_codegen::MappingGenerator;
//! use lora_core::GeneratorConfig;
//! use lora_core::appliance::{parse_appliances, validate};
//!
//! let appliance = validate(parse_appliances(
//!     r#"[{"key": "K", "iv": "I", "features": {"2": {"name": "Temp"}}}]"#,
//! ).unwrap()).unwrap();
//!
//! let generator = MappingGenerator::new(GeneratorConfig::string_mapping()).unwrap();
//! let output = generator.generate(&appliance, None).unwrap();
//!
//! assert!(output.code.contains("    case 2: return F(\"Temp\");\n"));
//! assert!(output.diagnostics.contains("#define HC_APPLIANCE_IV \"I\""));
//! ```

use crate::tables::{MappingTables, STANDARD_ERROR_MAP, ValueNames};
use crate::template_engine::TemplateEngine;
use crate::types::{
    ApplianceContext, FeatureEntry, GeneratedOutput, LoraKeyContext, MapKeyContext, ValueEntry,
    ValueFeature, ValueMappingContext,
};
use lora_core::appliance::PORT_80_ONLY;
use lora_core::{Appliance, Error, GeneratorConfig, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Generator for `mapping.cpp`.
///
/// Generation is deterministic: the same appliance and configuration always
/// yield byte-identical code. Only the diagnostics differ between runs, and
/// only when a fresh LoRa key is passed in.
#[derive(Debug)]
pub struct MappingGenerator<'a> {
    engine: TemplateEngine<'a>,
    config: GeneratorConfig,
}

impl MappingGenerator<'_> {
    /// Creates a new generator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
            config,
        })
    }

    /// Returns the configuration this generator renders with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates code and diagnostics for `appliance`.
    ///
    /// `lora_key` is reported in the diagnostics when given; pass a key from
    /// [`crate::keygen::generate_lora_key`] to rotate it.
    ///
    /// # Errors
    ///
    /// Returns an error if a feature or value key is not numeric, the
    /// appliance has no IV, or rendering fails. No partial output is
    /// returned.
    pub fn generate(
        &self,
        appliance: &Appliance,
        lora_key: Option<&SecretString>,
    ) -> Result<GeneratedOutput> {
        let tables = MappingTables::build(appliance)?;
        let code = self.render_code(&tables)?;
        let diagnostics = self.render_diagnostics(appliance, lora_key)?;

        Ok(GeneratedOutput { code, diagnostics })
    }

    /// Renders `mapKey` and the configured `mapIntValue` variant.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_code(&self, tables: &MappingTables) -> Result<String> {
        let map_key = MapKeyContext {
            generator_name: &self.config.generator_name,
            include_header: &self.config.include_header,
            features: tables
                .features()
                .iter()
                .map(|(key, name)| FeatureEntry { key: *key, name })
                .collect(),
        };

        let value_mapping = ValueMappingContext {
            standard_error_keys: tables.standard_error_keys(),
            standard_error_values: STANDARD_ERROR_MAP
                .iter()
                .map(|&(value, name)| ValueEntry { value, name })
                .collect(),
            value_features: tables
                .individual_value_keys()
                .map(|(key, values)| ValueFeature {
                    key,
                    values: value_entries(values),
                })
                .collect(),
        };

        debug!(
            "Rendering {} variant: {} shared, {} individual value branches",
            self.config.variant,
            value_mapping.standard_error_keys.len(),
            value_mapping.value_features.len()
        );

        let mut code = self.engine.render("mapping/map_key", &map_key)?;
        code.push_str(
            &self
                .engine
                .render(self.config.variant.template_name(), &value_mapping)?,
        );
        Ok(code)
    }

    fn render_diagnostics(
        &self,
        appliance: &Appliance,
        lora_key: Option<&SecretString>,
    ) -> Result<String> {
        let iv = appliance.iv.as_ref().ok_or_else(|| Error::ValidationError {
            field: "iv".to_string(),
            reason: PORT_80_ONLY.to_string(),
        })?;

        let mut diagnostics = self.engine.render(
            "diagnostics/appliance",
            &ApplianceContext {
                appliance_key: appliance.key.expose_secret(),
                appliance_iv: iv.expose_secret(),
            },
        )?;

        if let Some(lora_key) = lora_key {
            diagnostics.push_str(&self.engine.render(
                "diagnostics/lora_key",
                &LoraKeyContext {
                    lora_key: lora_key.expose_secret(),
                },
            )?);
        }

        Ok(diagnostics)
    }
}

fn value_entries(values: &ValueNames) -> Vec<ValueEntry<'_>> {
    values
        .iter()
        .map(|(value, name)| ValueEntry {
            value: *value,
            name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lora_core::appliance::parse_appliances;

    fn appliance(json: &str) -> Appliance {
        parse_appliances(json).unwrap().remove(0)
    }

    #[test]
    fn test_generator_keeps_config() {
        let generator = MappingGenerator::new(GeneratorConfig::json_mapping()).unwrap();
        assert!(!generator.config().rotate_key);
    }

    #[test]
    fn test_diagnostics_without_lora_key() {
        let generator = MappingGenerator::new(GeneratorConfig::default()).unwrap();
        let output = generator
            .generate(
                &appliance(r#"[{"key": "abc", "iv": "def", "features": {}}]"#),
                None,
            )
            .unwrap();

        assert_eq!(
            output.diagnostics,
            "Use these lines in your sender/config.h file:\n\
             \n\
             #define HC_APPLIANCE_KEY \"abc\"\n\
             #define HC_APPLIANCE_IV \"def\"\n\
             \n"
        );
    }

    #[test]
    fn test_diagnostics_with_lora_key() {
        let generator = MappingGenerator::new(GeneratorConfig::default()).unwrap();
        let key = SecretString::from("bG9yYQ".to_string());
        let output = generator
            .generate(
                &appliance(r#"[{"key": "abc", "iv": "def", "features": {}}]"#),
                Some(&key),
            )
            .unwrap();

        assert!(output.diagnostics.ends_with(
            "New random key for your sender/config.h and receiver/config.h file:\n\
             \n\
             #define LORA_ENCRYPT_KEY \"bG9yYQ\"\n\
             \n"
        ));
    }

    #[test]
    fn test_generate_requires_iv() {
        let generator = MappingGenerator::new(GeneratorConfig::default()).unwrap();
        let err = generator
            .generate(&appliance(r#"[{"key": "abc", "features": {}}]"#), None)
            .unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_invalid_key_produces_no_output() {
        let generator = MappingGenerator::new(GeneratorConfig::default()).unwrap();
        let result = generator.generate(
            &appliance(r#"[{"key": "K", "iv": "I", "features": {"x1": {"name": "Door"}}}]"#),
            None,
        );
        assert!(result.is_err());
    }
}
