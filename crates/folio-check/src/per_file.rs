//! Per-file validators, dispatched by document type.
//!
//! Each validator is `(Document, Schema) -> Vec<Issue>`. The table entry
//! name doubles as the `Issue.validator` value, which is also the auto-fix
//! dispatch key, so every rule here has a stable, unique name.

use folio_core::document::{DocType, Document};
use folio_core::frontmatter::Value;
use folio_core::issue::{Issue, Severity};
use folio_schema::{DocTypeSchema, SchemaRegistry};

/// A single per-file rule.
pub type PerFileValidator = fn(&Document, &DocTypeSchema) -> Vec<Issue>;

/// The dispatch table. Order here is report order within one file and one
/// severity.
pub const PER_FILE_VALIDATORS: &[(&str, PerFileValidator)] = &[
    ("frontmatter_required", frontmatter_required),
    ("status_value", status_value),
    ("sources_required", sources_required),
    ("sources_legacy_shape", sources_legacy_shape),
    ("word_count", word_count),
    ("section_missing", section_missing),
    ("section_order", section_order),
    ("section_unknown", section_unknown),
];

/// Look up a rule by its issue name (used by the fix engine to re-run the
/// originating validator after a rewrite).
#[must_use]
pub fn validator_by_name(name: &str) -> Option<PerFileValidator> {
    PER_FILE_VALIDATORS
        .iter()
        .find(|(entry_name, _)| *entry_name == name)
        .map(|(_, validator)| *validator)
}

/// Run every applicable per-file rule against one document.
///
/// An `Unparseable` document yields exactly one `fail` from the `parse`
/// pseudo-rule and is excluded from all type-specific checks.
#[must_use]
pub fn validate_document(document: &Document, registry: &SchemaRegistry) -> Vec<Issue> {
    if document.doc_type == DocType::Unparseable {
        let reason = document
            .parse_failure
            .as_deref()
            .unwrap_or("unknown parse failure");
        return vec![
            Issue::new(&document.path, "parse", Severity::Fail, reason)
                .with_suggestion("fix the frontmatter header so the file parses"),
        ];
    }

    let Some(schema) = registry.get(document.doc_type) else {
        // Registry misses a typed variant only on a programming defect;
        // surface it as an issue rather than crashing the batch.
        return vec![Issue::new(
            &document.path,
            "parse",
            Severity::Fail,
            format!("no schema registered for type '{}'", document.doc_type),
        )];
    };

    PER_FILE_VALIDATORS
        .iter()
        .flat_map(|(_, validator)| validator(document, schema))
        .collect()
}

fn frontmatter_required(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    schema
        .required_keys
        .iter()
        .filter(|key| {
            document
                .frontmatter
                .get(key)
                .is_none_or(folio_core::frontmatter::Value::is_empty)
        })
        .map(|key| {
            Issue::new(
                &document.path,
                "frontmatter_required",
                Severity::Fail,
                format!("missing required frontmatter key '{key}'"),
            )
            .with_suggestion(format!("add a non-empty '{key}' value to the frontmatter"))
        })
        .collect()
}

fn status_value(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    if !schema.has_lifecycle {
        return Vec::new();
    }
    let Some(raw) = document.frontmatter.get_scalar("status") else {
        return Vec::new(); // absence is frontmatter_required's finding
    };
    if raw.trim().is_empty() || document.status().is_some() {
        return Vec::new();
    }
    vec![
        Issue::new(
            &document.path,
            "status_value",
            Severity::Fail,
            format!("unknown status '{raw}'"),
        )
        .with_suggestion("use one of: draft, active, complete, abandoned"),
    ]
}

fn sources_required(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    if !schema.requires_sources {
        return Vec::new();
    }
    let empty = document
        .frontmatter
        .get("sources")
        .is_none_or(Value::is_empty);
    if !empty {
        return Vec::new();
    }
    vec![
        Issue::new(
            &document.path,
            "sources_required",
            Severity::Fail,
            "research documents must list at least one source",
        )
        .with_suggestion("add a non-empty 'sources' list to the frontmatter"),
    ]
}

fn sources_legacy_shape(document: &Document, _schema: &DocTypeSchema) -> Vec<Issue> {
    ["sources", "related"]
        .iter()
        .filter(|key| {
            document
                .frontmatter
                .get(key)
                .is_some_and(Value::is_legacy_shape)
        })
        .map(|key| {
            Issue::new(
                &document.path,
                "sources_legacy_shape",
                Severity::Warn,
                format!("'{key}' uses the legacy list-of-mappings shape"),
            )
            .with_suggestion(format!("rewrite '{key}' as a plain list of strings"))
        })
        .collect()
}

fn word_count(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    let words = document.body_word_count();
    if (schema.min_words..=schema.max_words).contains(&words) {
        return Vec::new();
    }
    vec![Issue::new(
        &document.path,
        "word_count",
        Severity::Warn,
        format!(
            "body is {words} words, outside the {}..={} bound for {} documents",
            schema.min_words, schema.max_words, schema.doc_type
        ),
    )]
}

fn section_missing(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    schema
        .required_sections()
        .filter(|name| !document.has_section(name))
        .map(|name| {
            Issue::new(
                &document.path,
                "section_missing",
                Severity::Fail,
                format!("required section '{name}' is missing"),
            )
            .with_section(name)
            .with_suggestion(format!("add a '## {name}' section (auto-fixable)"))
        })
        .collect()
}

fn section_order(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    // Ranks of known canonical sections in order of appearance.
    let ranks: Vec<usize> = document
        .sections
        .iter()
        .filter_map(|section| {
            schema
                .section_order()
                .position(|name| name == section.heading)
        })
        .collect();

    if ranks.windows(2).all(|pair| pair[0] <= pair[1]) {
        return Vec::new();
    }
    vec![
        Issue::new(
            &document.path,
            "section_order",
            Severity::Warn,
            format!(
                "sections are out of canonical order (expected {})",
                schema.section_order().collect::<Vec<_>>().join(", ")
            ),
        )
        .with_suggestion("reorder sections to the canonical order (auto-fixable)"),
    ]
}

fn section_unknown(document: &Document, schema: &DocTypeSchema) -> Vec<Issue> {
    if schema.sections.is_empty() {
        // Free-form types (notes) accept any headings.
        return Vec::new();
    }
    document
        .sections
        .iter()
        .filter(|section| !section.is_preamble() && !schema.knows_section(&section.heading))
        .map(|section| {
            Issue::new(
                &document.path,
                "section_unknown",
                Severity::Info,
                format!("section '{}' is not canonical for {} documents", section.heading, schema.doc_type),
            )
            .with_section(&section.heading)
        })
        .collect()
}
