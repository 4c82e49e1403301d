//! Cross-cutting error types for Folio.
//!
//! This module defines errors that can originate from any crate in the system.
//! Domain-specific errors (e.g., `ParseError`, `IndexError`) are defined in
//! their respective crates. A unified error surface is deferred to `folio-cli`
//! where all crate errors converge through `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::status::PlanStatus;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lifecycle transition was attempted that is not in the transition table.
    #[error(
        "Invalid status transition for {path}: {from} -> {to} (allowed from {from}: {})",
        format_allowed(allowed)
    )]
    InvalidTransition {
        path: PathBuf,
        from: PlanStatus,
        to: PlanStatus,
        allowed: &'static [PlanStatus],
    },

    /// An operation was applied to a document of the wrong type.
    #[error("Document {path} has no lifecycle status (type {doc_type})")]
    NoLifecycle { path: PathBuf, doc_type: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A filesystem read or write could not be completed.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_allowed(allowed: &[PlanStatus]) -> String {
    if allowed.is_empty() {
        return "none".to_string();
    }
    allowed
        .iter()
        .map(|status| status.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
