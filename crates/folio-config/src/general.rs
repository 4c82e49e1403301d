//! General and check-pass configuration sections.

use serde::{Deserialize, Serialize};

fn default_root() -> String {
    ".".to_string()
}

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Document tree root, relative to the project root.
    #[serde(default = "default_root")]
    pub root: String,

    /// Default output format when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            default_format: default_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Escalate warnings to a non-zero exit, matching `fol check --strict`.
    #[serde(default)]
    pub strict: bool,
}
