//! # folio-schema
//!
//! Document type schemas and the schema registry for Folio.
//!
//! This crate provides:
//! - `DocTypeSchema`: per-type rules (canonical sections, word bounds,
//!   directory pattern, required frontmatter keys)
//! - `SchemaRegistry`: immutable registry built once at startup and passed by
//!   reference into validators, the index synchronizer, and the fix engine
//! - `JsonSchemaExport`: JSON Schema export of folio-core types for the
//!   `fol schema` command (schemars + jsonschema)
//!
//! Adding a new document type means adding one entry in
//! [`SchemaRegistry::new`]; no other component changes.

mod error;
mod export;
mod registry;

pub use error::SchemaError;
pub use export::JsonSchemaExport;
pub use registry::{DocTypeSchema, SchemaRegistry, SectionSpec, slug_is_valid};
