//! Per-type document schemas and the central registry.
//!
//! The registry is built once at startup and passed by reference into every
//! component that needs it. There is no ambient or global lookup.

use std::path::Path;

use folio_core::document::DocType;
use globset::{Glob, GlobMatcher};

/// One canonical section of a document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub required: bool,
}

impl SectionSpec {
    const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }
}

/// Validation rules for one document type.
#[derive(Debug, Clone)]
pub struct DocTypeSchema {
    pub doc_type: DocType,
    /// Glob the document's relative path must match.
    pub dir_pattern: &'static str,
    matcher: GlobMatcher,
    /// Canonical sections in canonical order.
    pub sections: &'static [SectionSpec],
    /// Inclusive body word-count bounds.
    pub min_words: usize,
    pub max_words: usize,
    /// Frontmatter keys that must be present and non-empty.
    pub required_keys: &'static [&'static str],
    /// Whether a non-empty `sources` list is required (research docs).
    pub requires_sources: bool,
    /// Whether the type carries a `status` lifecycle field (plan docs).
    pub has_lifecycle: bool,
}

impl DocTypeSchema {
    /// Whether `path` (relative to the corpus root) lives in this type's
    /// allowed directory.
    #[must_use]
    pub fn path_matches(&self, path: &Path) -> bool {
        self.matcher.is_match(path)
    }

    /// Canonical section names in order.
    pub fn section_order(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|spec| spec.name)
    }

    /// Required section names in canonical order.
    pub fn required_sections(&self) -> impl Iterator<Item = &'static str> {
        self.sections
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    /// Whether `heading` is one of this type's canonical sections.
    #[must_use]
    pub fn knows_section(&self, heading: &str) -> bool {
        self.sections.iter().any(|spec| spec.name == heading)
    }
}

/// Whether a file stem is a valid kebab-case slug
/// (`[a-z0-9]+(-[a-z0-9]+)*`).
#[must_use]
pub fn slug_is_valid(stem: &str) -> bool {
    !stem.is_empty()
        && !stem.starts_with('-')
        && !stem.ends_with('-')
        && !stem.contains("--")
        && stem
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

const GUIDE_SECTIONS: &[SectionSpec] = &[
    SectionSpec::required("Guidance"),
    SectionSpec::required("Pitfalls"),
    SectionSpec::optional("Examples"),
];

const RESEARCH_SECTIONS: &[SectionSpec] = &[
    SectionSpec::required("Summary"),
    SectionSpec::required("Findings"),
    SectionSpec::optional("Open Questions"),
];

const PLAN_SECTIONS: &[SectionSpec] = &[
    SectionSpec::required("Goal"),
    SectionSpec::required("Approach"),
    SectionSpec::required("Steps"),
    SectionSpec::optional("Outcome"),
];

const NOTE_SECTIONS: &[SectionSpec] = &[];

/// Immutable registry mapping each document type to its schema.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<DocTypeSchema>,
}

impl SchemaRegistry {
    /// Build the registry with all known document types.
    ///
    /// # Panics
    ///
    /// Panics if a built-in directory glob fails to compile. The patterns are
    /// literals, so this indicates a programming defect, not bad input.
    #[must_use]
    pub fn new() -> Self {
        let schema = |doc_type,
                      dir_pattern: &'static str,
                      sections: &'static [SectionSpec],
                      min_words,
                      max_words,
                      required_keys: &'static [&'static str],
                      requires_sources,
                      has_lifecycle| DocTypeSchema {
            doc_type,
            dir_pattern,
            matcher: Glob::new(dir_pattern)
                .expect("built-in dir glob must compile")
                .compile_matcher(),
            sections,
            min_words,
            max_words,
            required_keys,
            requires_sources,
            has_lifecycle,
        };

        let schemas = vec![
            schema(
                DocType::Guide,
                "guides/**",
                GUIDE_SECTIONS,
                50,
                2000,
                &["name", "description"],
                false,
                false,
            ),
            schema(
                DocType::Research,
                "research/**",
                RESEARCH_SECTIONS,
                50,
                3000,
                &["name", "description"],
                true,
                false,
            ),
            schema(
                DocType::Plan,
                "plans/**",
                PLAN_SECTIONS,
                30,
                2500,
                &["name", "description", "status"],
                false,
                true,
            ),
            schema(
                DocType::Note,
                "notes/**",
                NOTE_SECTIONS,
                10,
                1500,
                &["name", "description"],
                false,
                false,
            ),
        ];

        Self { schemas }
    }

    /// Look up the schema for a document type. `Unparseable` has no schema.
    #[must_use]
    pub fn get(&self, doc_type: DocType) -> Option<&DocTypeSchema> {
        self.schemas.iter().find(|s| s.doc_type == doc_type)
    }

    /// Iterate all registered schemas.
    pub fn iter(&self) -> impl Iterator<Item = &DocTypeSchema> {
        self.schemas.iter()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
