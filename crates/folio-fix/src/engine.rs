//! The auto-fix dispatch table and engine.

use std::path::PathBuf;

use folio_core::document::{Document, Section};
use folio_core::issue::Issue;
use folio_parser::{decode, render_document, split_sections};
use folio_schema::{DocTypeSchema, SchemaRegistry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder body for inserted sections.
const PLACEHOLDER: &str = "_TODO: fill in._\n";

/// A deterministic rewrite for one fixable issue kind.
type Fixer = fn(&Document, &DocTypeSchema) -> Document;

/// The dispatch table. Issues whose validator name is not listed here are
/// reported only, never auto-fixed.
const FIXERS: &[(&str, Fixer)] = &[
    ("section_order", reorder_sections),
    ("section_missing", insert_missing_sections),
];

/// Whether a fix exists for this issue kind.
#[must_use]
pub fn fix_available(validator: &str) -> bool {
    FIXERS.iter().any(|(name, _)| *name == validator)
}

/// Outcome of attempting one fix. `Unavailable` (no dispatch entry) and
/// `Failed` (a fix was applied but did not hold up) are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum FixOutcome {
    Fixed,
    Unavailable,
    Failed { reason: String },
}

/// One attempted fix on one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FixRecord {
    pub validator: String,
    #[serde(flatten)]
    pub outcome: FixOutcome,
}

/// All fix attempts for one file, plus whether the rewrite reached disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FileFixReport {
    pub path: PathBuf,
    pub records: Vec<FixRecord>,
    pub written: bool,
    /// Set when the final write failed; the fix results above still stand.
    pub write_error: Option<String>,
}

/// Apply the fix for `validator` to `document`, then prove it: the rewritten
/// text must re-parse to the same model (round-trip) and re-running the
/// originating validator must no longer produce the issue.
///
/// Returns the re-parsed document on success so later fixes in the same pass
/// build on verified state.
pub fn apply_fix(
    document: &Document,
    validator: &str,
    schema: &DocTypeSchema,
) -> (FixOutcome, Option<Document>) {
    let Some((_, fixer)) = FIXERS.iter().find(|(name, _)| *name == validator) else {
        return (FixOutcome::Unavailable, None);
    };

    let rewritten = fixer(document, schema);
    let rendered = render_document(&rewritten.frontmatter, &rewritten.sections);

    let (frontmatter, body) = match decode(&rendered) {
        Ok(parsed) => parsed,
        Err(error) => {
            return (
                FixOutcome::Failed {
                    reason: format!("rewritten document no longer parses: {error}"),
                },
                None,
            );
        }
    };
    if frontmatter != rewritten.frontmatter {
        return (
            FixOutcome::Failed {
                reason: "rewritten frontmatter failed the round-trip law".to_string(),
            },
            None,
        );
    }

    let reparsed = Document {
        path: rewritten.path.clone(),
        doc_type: rewritten.doc_type,
        frontmatter,
        sections: split_sections(&body),
        parse_failure: None,
    };

    let still_failing = folio_check::validator_by_name(validator)
        .is_some_and(|rule| !rule(&reparsed, schema).is_empty());
    if still_failing {
        return (
            FixOutcome::Failed {
                reason: format!("issue '{validator}' persists after the fix"),
            },
            None,
        );
    }

    (FixOutcome::Fixed, Some(reparsed))
}

/// Apply every fixable issue of one file in sequence, then write the result
/// back (unless `write` is false). Issues without a dispatch entry are
/// recorded `Unavailable` and skipped.
#[must_use]
pub fn fix_file(
    root: &std::path::Path,
    document: &Document,
    issues: &[Issue],
    registry: &SchemaRegistry,
    write: bool,
) -> FileFixReport {
    let mut report = FileFixReport {
        path: document.path.clone(),
        records: Vec::new(),
        written: false,
        write_error: None,
    };

    let Some(schema) = registry.get(document.doc_type) else {
        // Unparseable documents have nothing to dispatch on.
        for issue in issues {
            report.records.push(FixRecord {
                validator: issue.validator.clone(),
                outcome: FixOutcome::Unavailable,
            });
        }
        return report;
    };

    let mut current = document.clone();
    let mut changed = false;
    for issue in issues {
        if !fix_available(&issue.validator) {
            report.records.push(FixRecord {
                validator: issue.validator.clone(),
                outcome: FixOutcome::Unavailable,
            });
            continue;
        }

        let (outcome, fixed) = apply_fix(&current, &issue.validator, schema);
        if let Some(fixed) = fixed {
            current = fixed;
            changed = true;
        }
        report.records.push(FixRecord {
            validator: issue.validator.clone(),
            outcome,
        });
    }

    if changed && write {
        let text = render_document(&current.frontmatter, &current.sections);
        match std::fs::write(root.join(&current.path), text) {
            Ok(()) => report.written = true,
            Err(error) => report.write_error = Some(error.to_string()),
        }
    }

    debug!(path = %document.path.display(), records = report.records.len(), "fix pass for file done");
    report
}

/// Fix every file that has issues, sequentially. Partial-failure tolerant:
/// each file's report stands on its own.
#[must_use]
pub fn fix_corpus(
    corpus: &folio_parser::Corpus,
    issues: &[Issue],
    registry: &SchemaRegistry,
    write: bool,
) -> Vec<FileFixReport> {
    corpus
        .documents
        .iter()
        .filter_map(|document| {
            let file_issues: Vec<Issue> = issues
                .iter()
                .filter(|issue| issue.file == document.path)
                .cloned()
                .collect();
            if file_issues.iter().any(|issue| fix_available(&issue.validator)) {
                Some(fix_file(&corpus.root, document, &file_issues, registry, write))
            } else {
                None
            }
        })
        .collect()
}

/// Reorder existing sections to canonical order without altering content.
/// The preamble stays first; sections unknown to the schema keep their
/// relative order after the canonical ones.
fn reorder_sections(document: &Document, schema: &DocTypeSchema) -> Document {
    let canonical_len = schema.sections.len();
    let rank = |section: &Section| -> usize {
        if section.is_preamble() {
            return 0;
        }
        schema
            .section_order()
            .position(|name| name == section.heading)
            .map_or(canonical_len + 1, |position| position + 1)
    };

    let mut rewritten = document.clone();
    rewritten.sections.sort_by_key(rank);
    rewritten
}

/// Insert every missing required section with a placeholder body, at its
/// canonical position among the sections already present.
fn insert_missing_sections(document: &Document, schema: &DocTypeSchema) -> Document {
    let mut rewritten = document.clone();

    for (canonical_rank, name) in schema.section_order().enumerate() {
        let required = schema
            .sections
            .get(canonical_rank)
            .is_some_and(|spec| spec.required);
        if !required || rewritten.has_section(name) {
            continue;
        }

        // After the preamble and any canonical section that sorts earlier.
        let insert_at = rewritten
            .sections
            .iter()
            .take_while(|section| {
                section.is_preamble()
                    || schema
                        .section_order()
                        .position(|known| known == section.heading)
                        .is_some_and(|rank| rank < canonical_rank)
            })
            .count();
        rewritten
            .sections
            .insert(insert_at, Section::new(name, PLACEHOLDER));
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use folio_core::document::{DocType, Document, Section};
    use folio_core::frontmatter::{Frontmatter, Value};
    use folio_parser::load_corpus;
    use folio_schema::SchemaRegistry;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{FixOutcome, apply_fix, fix_available, fix_corpus};

    fn guide(sections: &[(&str, &str)]) -> Document {
        let mut frontmatter = Frontmatter::new();
        frontmatter.insert("type", Value::Scalar("guide".into()));
        frontmatter.insert("name", Value::Scalar("sample".into()));
        frontmatter.insert("description", Value::Scalar("a sample".into()));
        Document {
            path: "guides/sample.md".into(),
            doc_type: DocType::Guide,
            frontmatter,
            sections: sections
                .iter()
                .map(|(heading, body)| Section::new(*heading, *body))
                .collect(),
            parse_failure: None,
        }
    }

    #[test]
    fn reorder_matches_canonical_order_and_keeps_content() {
        let registry = SchemaRegistry::new();
        let schema = registry.get(DocType::Guide).unwrap();
        let doc = guide(&[("Pitfalls", "trap text\n"), ("Guidance", "guide text\n")]);

        let (outcome, fixed) = apply_fix(&doc, "section_order", schema);
        assert_eq!(outcome, FixOutcome::Fixed);

        let fixed = fixed.unwrap();
        let headings: Vec<_> = fixed.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Guidance", "Pitfalls"]);
        assert_eq!(fixed.section_index("Pitfalls").map(|i| fixed.sections[i].body.as_str()), Some("trap text\n"));
    }

    #[test]
    fn reordered_document_matches_an_already_ordered_one() {
        let registry = SchemaRegistry::new();
        let schema = registry.get(DocType::Guide).unwrap();
        let a = guide(&[("Guidance", "g\n"), ("Pitfalls", "p\n")]);
        let b = guide(&[("Pitfalls", "p\n"), ("Guidance", "g\n")]);

        let (_, fixed_b) = apply_fix(&b, "section_order", schema);
        assert_eq!(fixed_b.unwrap().sections, a.sections);
    }

    #[test]
    fn missing_section_inserted_at_canonical_position() {
        let registry = SchemaRegistry::new();
        let schema = registry.get(DocType::Guide).unwrap();
        let doc = guide(&[("", "preamble\n"), ("Pitfalls", "trap text\n")]);

        let (outcome, fixed) = apply_fix(&doc, "section_missing", schema);
        assert_eq!(outcome, FixOutcome::Fixed);

        let fixed = fixed.unwrap();
        let headings: Vec<_> = fixed.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["", "Guidance", "Pitfalls"]);
        assert!(fixed.sections[1].body.contains("TODO"));
    }

    #[test]
    fn unknown_issue_kind_is_unavailable_not_failed() {
        let registry = SchemaRegistry::new();
        let schema = registry.get(DocType::Guide).unwrap();
        let doc = guide(&[("Guidance", "g\n"), ("Pitfalls", "p\n")]);

        let (outcome, fixed) = apply_fix(&doc, "related_links", schema);
        assert_eq!(outcome, FixOutcome::Unavailable);
        assert!(fixed.is_none());
        assert!(!fix_available("related_links"));
    }

    #[test]
    fn fix_pass_rewrites_file_and_revalidates_clean() {
        let dir = TempDir::new().unwrap();
        let rel = "guides/sample.md";
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            format!(
                "---\ntype: guide\nname: sample\ndescription: a sample\n---\n## Pitfalls\n{}\n## Guidance\n{}\n",
                "trap words ".repeat(15),
                "guide words ".repeat(15),
            ),
        )
        .unwrap();

        let registry = SchemaRegistry::new();
        let corpus = load_corpus(dir.path());
        let issues = folio_check::run_all(&corpus, &registry).issues;
        assert!(issues.iter().any(|i| i.validator == "section_order"));

        let reports = fix_corpus(&corpus, &issues, &registry, true);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].written);

        let corpus = load_corpus(dir.path());
        let issues = folio_check::run_all(&corpus, &registry).issues;
        assert!(!issues.iter().any(|i| i.validator == "section_order"));

        let doc = corpus.get(Path::new(rel)).unwrap();
        let headings: Vec<_> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Guidance", "Pitfalls"]);
    }
}
