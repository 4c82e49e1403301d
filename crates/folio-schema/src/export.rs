//! JSON Schema export of folio-core types.
//!
//! Schemas are built from folio-core types at construction time using
//! [`schemars::schema_for!`] and validated via `jsonschema`. The `fol schema`
//! command serves these to external tooling (editor plugins, CI).

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Exported JSON Schemas for all public Folio value types.
pub struct JsonSchemaExport {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl JsonSchemaExport {
    /// Build the export set containing document, issue, status, and response
    /// schemas from folio-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        register!(schemas, "document", folio_core::document::Document);
        register!(schemas, "section", folio_core::document::Section);
        register!(schemas, "doc_type", folio_core::document::DocType);
        register!(schemas, "frontmatter", folio_core::frontmatter::Frontmatter);
        register!(schemas, "issue", folio_core::issue::Issue);
        register!(schemas, "severity", folio_core::issue::Severity);
        register!(schemas, "plan_status", folio_core::status::PlanStatus);
        register!(
            schemas,
            "check_response",
            folio_core::responses::CheckResponse
        );
        register!(
            schemas,
            "transition_response",
            folio_core::responses::TransitionResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for JsonSchemaExport {
    fn default() -> Self {
        Self::new()
    }
}
