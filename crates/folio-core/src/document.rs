//! The typed document model.
//!
//! A `Document` is the parsed form of one markdown file: its frontmatter, its
//! body segmented into level-2 sections, and a classification into one of the
//! closed set of document types. Classification comes from the explicit
//! `type` frontmatter key, never from content sniffing. A file whose header
//! cannot be parsed, or whose `type` value is absent or unrecognized, is
//! classified `Unparseable` and treated as inert by type-specific validators
//! (it stays visible to path-existence checks from other documents).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frontmatter::{Frontmatter, Value};
use crate::status::PlanStatus;

/// The closed set of document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Guide,
    Research,
    Plan,
    Note,
    /// Header failed to parse or `type` was absent/unrecognized.
    Unparseable,
}

impl DocType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Research => "research",
            Self::Plan => "plan",
            Self::Note => "note",
            Self::Unparseable => "unparseable",
        }
    }

    /// The typed variants, excluding `Unparseable`.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Guide, Self::Research, Self::Plan, Self::Note]
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guide" => Ok(Self::Guide),
            "research" => Ok(Self::Research),
            "plan" => Ok(Self::Plan),
            "note" => Ok(Self::Note),
            other => Err(format!("unknown document type '{other}'")),
        }
    }
}

/// One level-2 section of a document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Section {
    /// Heading text without the `## ` prefix. Empty for the implicit
    /// preamble section before the first heading.
    pub heading: String,
    /// Raw section text, heading line excluded.
    pub body: String,
    pub word_count: usize,
}

impl Section {
    #[must_use]
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        let heading = heading.into();
        let body = body.into();
        let word_count = body.split_whitespace().count();
        Self {
            heading,
            body,
            word_count,
        }
    }

    /// Whether this is the implicit preamble before the first heading.
    #[must_use]
    pub fn is_preamble(&self) -> bool {
        self.heading.is_empty()
    }
}

/// A parsed markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Document {
    /// Path relative to the corpus root; the document's identity.
    pub path: PathBuf,
    pub doc_type: DocType,
    pub frontmatter: Frontmatter,
    pub sections: Vec<Section>,
    /// Present only on `Unparseable` documents: why parsing failed.
    pub parse_failure: Option<String>,
}

impl Document {
    /// Build an inert placeholder for a file that failed to parse.
    #[must_use]
    pub fn unparseable(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            doc_type: DocType::Unparseable,
            frontmatter: Frontmatter::new(),
            sections: Vec::new(),
            parse_failure: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.frontmatter.get_scalar("name")
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.frontmatter.get_scalar("description")
    }

    /// Entries of the `related` key, flattened to strings.
    #[must_use]
    pub fn related(&self) -> Vec<&str> {
        self.frontmatter
            .get("related")
            .map(Value::as_items)
            .unwrap_or_default()
    }

    /// Entries of the `sources` key, flattened to strings.
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        self.frontmatter
            .get("sources")
            .map(Value::as_items)
            .unwrap_or_default()
    }

    /// Parsed lifecycle status, for documents that carry one.
    #[must_use]
    pub fn status(&self) -> Option<PlanStatus> {
        self.frontmatter
            .get_scalar("status")
            .and_then(|raw| raw.parse().ok())
    }

    /// Total word count across all sections.
    #[must_use]
    pub fn body_word_count(&self) -> usize {
        self.sections.iter().map(|s| s.word_count).sum()
    }

    /// Position of a section by heading.
    #[must_use]
    pub fn section_index(&self, heading: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.heading == heading)
    }

    #[must_use]
    pub fn has_section(&self, heading: &str) -> bool {
        self.section_index(heading).is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{DocType, Document, Section};
    use crate::frontmatter::{Frontmatter, Value};

    fn doc_with_sections(headings: &[&str]) -> Document {
        let mut frontmatter = Frontmatter::new();
        frontmatter.insert("type", Value::Scalar("guide".into()));
        frontmatter.insert("name", Value::Scalar("sample".into()));
        frontmatter.insert("description", Value::Scalar("a sample".into()));
        Document {
            path: "guides/sample.md".into(),
            doc_type: DocType::Guide,
            frontmatter,
            sections: headings
                .iter()
                .map(|h| Section::new(*h, "one two three"))
                .collect(),
            parse_failure: None,
        }
    }

    #[test]
    fn word_counts_sum_across_sections() {
        let doc = doc_with_sections(&["Guidance", "Pitfalls"]);
        assert_eq!(doc.body_word_count(), 6);
    }

    #[test]
    fn section_lookup_by_heading() {
        let doc = doc_with_sections(&["Guidance", "Pitfalls"]);
        assert_eq!(doc.section_index("Pitfalls"), Some(1));
        assert!(!doc.has_section("Examples"));
    }

    #[test]
    fn unparseable_carries_reason_and_empty_frontmatter() {
        let doc = Document::unparseable("broken.md".into(), "missing header");
        assert_eq!(doc.doc_type, DocType::Unparseable);
        assert_eq!(doc.parse_failure.as_deref(), Some("missing header"));
        assert!(doc.name().is_none());
    }
}
