//! Lifecycle status for plan documents.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `PlanStatus` provides `allowed_next_states()` to enforce valid transitions
//! at the application layer; nothing ever coerces an invalid edge.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a plan document.
///
/// ```text
/// draft → active    → complete → active (reopen)
///       → abandoned ← active
/// abandoned → draft (revive)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    Active,
    Complete,
    Abandoned,
}

impl PlanStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Active, Self::Abandoned],
            Self::Active => &[Self::Complete, Self::Abandoned],
            Self::Complete => &[Self::Active],
            Self::Abandoned => &[Self::Draft],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Complete => "complete",
            Self::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "complete" => Ok(Self::Complete),
            "abandoned" => Ok(Self::Abandoned),
            other => Err(format!(
                "unknown status '{other}' (expected draft, active, complete, or abandoned)"
            )),
        }
    }
}
