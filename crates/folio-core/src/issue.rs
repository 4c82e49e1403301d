//! Issue records produced by validators.
//!
//! Issues are pure values: producing one has no side effect, and no validator
//! ever raises for an expected condition.

use std::fmt;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
///
/// Ordering is by urgency: `Fail > Warn > Info`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warn,
    Fail,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding from a validator, attributed to a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub file: PathBuf,
    /// Name of the producing rule (also the auto-fix dispatch key).
    pub validator: String,
    pub severity: Severity,
    /// Offending section heading, when the issue is section-scoped.
    pub section: Option<String>,
    pub message: String,
    /// Human-readable remediation hint.
    pub suggestion: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        validator: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            validator: validator.into(),
            severity,
            section: None,
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Stable report order: by file, then severity (fails first), then rule.
    pub fn sort_key(&self) -> (PathBuf, std::cmp::Reverse<Severity>, String) {
        (
            self.file.clone(),
            std::cmp::Reverse(self.severity),
            self.validator.clone(),
        )
    }
}
