//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in mapping and
//! diagnostics templates registered. Expressions are escaped for C string
//! literals instead of HTML, since every interpolated value ends up inside
//! `"..."` in the generated code.
//!
//! # Examples
//!
//! ```
//! use lora_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let text = engine
//!     .render("diagnostics/lora_key", &json!({"lora_key": "abc"}))
//!     .unwrap();
//! assert!(text.contains("#define LORA_ENCRYPT_KEY \"abc\""));
//! ```

use handlebars::Handlebars;
use lora_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const TEMPLATES: [(&str, &str); 5] = [
    (
        "mapping/map_key",
        include_str!("../templates/mapping/map_key.cpp.hbs"),
    ),
    (
        "mapping/string",
        include_str!("../templates/mapping/string.cpp.hbs"),
    ),
    (
        "mapping/json",
        include_str!("../templates/mapping/json.cpp.hbs"),
    ),
    (
        "diagnostics/appliance",
        include_str!("../templates/diagnostics/appliance.txt.hbs"),
    ),
    (
        "diagnostics/lora_key",
        include_str!("../templates/diagnostics/lora_key.txt.hbs"),
    ),
];

/// Template engine for code generation.
///
/// This type is `Send` and `Sync`.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(escape_c_string);

        for (name, source) in TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::SerializationError {
                    message: format!("Failed to register template '{name}': {e}"),
                    source: None,
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails, e.g. a variable is missing
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::SerializationError {
                message: format!("Template rendering failed: {e}"),
                source: None,
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

/// Escapes text for use inside a C string literal.
///
/// Quotes and backslashes are backslash-escaped, common control characters
/// use their short escapes and any other ASCII control character becomes a
/// three-digit octal escape. Everything else, including non-ASCII text, is
/// passed through unchanged.
///
/// # Examples
///
/// ```
/// use lora_codegen::template_engine::escape_c_string;
///
/// assert_eq!(escape_c_string("Door"), "Door");
/// assert_eq!(escape_c_string(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape_c_string("a\\b"), "a\\\\b");
/// ```
#[must_use]
pub fn escape_c_string(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => {
                escaped.push_str(&format!("\\{:03o}", u32::from(c)));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
