//! CLI response types returned as JSON by `fol` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `fol check` and `fol plan status`.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::issue::Issue;
use crate::status::PlanStatus;

/// Response from `fol check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckResponse {
    pub root: PathBuf,
    pub documents_checked: usize,
    pub fail_count: usize,
    pub warn_count: usize,
    pub info_count: usize,
    pub issues: Vec<Issue>,
}

impl CheckResponse {
    /// Tally severities from an already-sorted issue list.
    #[must_use]
    pub fn from_issues(root: PathBuf, documents_checked: usize, issues: Vec<Issue>) -> Self {
        use crate::issue::Severity;
        let count = |severity: Severity| issues.iter().filter(|i| i.severity == severity).count();
        Self {
            root,
            documents_checked,
            fail_count: count(Severity::Fail),
            warn_count: count(Severity::Warn),
            info_count: count(Severity::Info),
            issues,
        }
    }
}

/// Response from `fol plan status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TransitionResponse {
    pub path: PathBuf,
    pub from: PlanStatus,
    pub to: PlanStatus,
    /// New `updated` frontmatter value (`%Y-%m-%d`).
    pub updated: String,
}
