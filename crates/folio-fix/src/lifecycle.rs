//! Plan lifecycle transitions.
//!
//! A transition consults the `PlanStatus` transition table and either
//! returns the rewritten document or an error naming the valid target set.
//! It never coerces an invalid edge and never moves more than one hop.

use chrono::{DateTime, Utc};
use folio_core::document::{DocType, Document};
use folio_core::errors::CoreError;
use folio_core::frontmatter::Value;
use folio_core::status::PlanStatus;
use tracing::info;

/// Transition `document` to `target`, stamping `status` and `updated`
/// frontmatter.
///
/// # Errors
///
/// - [`CoreError::NoLifecycle`] when the document type carries no status
///   field, or its `status` value is missing/unreadable.
/// - [`CoreError::InvalidTransition`] when the edge is not in the table;
///   the error lists the allowed targets from the current state.
pub fn transition(
    document: &Document,
    target: PlanStatus,
    now: DateTime<Utc>,
) -> Result<Document, CoreError> {
    if document.doc_type != DocType::Plan {
        return Err(CoreError::NoLifecycle {
            path: document.path.clone(),
            doc_type: document.doc_type.to_string(),
        });
    }
    let Some(current) = document.status() else {
        return Err(CoreError::NoLifecycle {
            path: document.path.clone(),
            doc_type: document.doc_type.to_string(),
        });
    };

    if !current.can_transition_to(target) {
        return Err(CoreError::InvalidTransition {
            path: document.path.clone(),
            from: current,
            to: target,
            allowed: current.allowed_next_states(),
        });
    }

    let mut rewritten = document.clone();
    rewritten
        .frontmatter
        .insert("status", Value::Scalar(target.as_str().to_string()));
    rewritten.frontmatter.insert(
        "updated",
        Value::Scalar(now.format("%Y-%m-%d").to_string()),
    );

    info!(path = %document.path.display(), %current, %target, "plan status transitioned");
    Ok(rewritten)
}
