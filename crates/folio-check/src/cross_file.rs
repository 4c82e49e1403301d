//! Cross-file validators.
//!
//! These run once over the fully loaded corpus and read the derived index
//! files already on disk. They never mutate anything: regeneration is the
//! index synchronizer's separate, opt-in write pass.

use std::path::Path;

use folio_core::document::DocType;
use folio_core::issue::{Issue, Severity};
use folio_index::{INDEX_FILE, entries_for_dir, extract_preamble, parse_entries};
use folio_parser::Corpus;
use folio_schema::{SchemaRegistry, slug_is_valid};

/// Run all cross-file checks: link graph, index sync, naming conventions.
#[must_use]
pub fn run_cross_file(corpus: &Corpus, registry: &SchemaRegistry) -> Vec<Issue> {
    let mut issues = related_links(corpus);
    issues.extend(index_sync(corpus));
    issues.extend(naming(corpus, registry));
    issues
}

fn is_url(entry: &str) -> bool {
    entry.starts_with("http://") || entry.starts_with("https://")
}

/// Every non-URL `related` entry must resolve to a loaded document.
/// Unparseable documents are valid link targets: the file exists even when
/// its header does not parse.
fn related_links(corpus: &Corpus) -> Vec<Issue> {
    let mut issues = Vec::new();
    for document in &corpus.documents {
        for entry in document.related() {
            if is_url(entry) {
                continue;
            }
            if !corpus.contains_path(Path::new(entry)) {
                issues.push(
                    Issue::new(
                        &document.path,
                        "related_links",
                        Severity::Fail,
                        format!("related entry '{entry}' does not resolve to a document"),
                    )
                    .with_suggestion("fix the path or remove the stale entry"),
                );
            }
        }
    }
    issues
}

/// Compare each directory's expected index entries against the `INDEX.md`
/// on disk, order-significant, ignoring the preserved preamble.
fn index_sync(corpus: &Corpus) -> Vec<Issue> {
    let mut issues = Vec::new();
    for dir in corpus.directories() {
        let expected = entries_for_dir(corpus, &dir);
        if expected.is_empty() {
            continue;
        }

        let index_rel = dir.join(INDEX_FILE);
        let index_abs = corpus.root.join(&index_rel);
        let existing = match std::fs::read_to_string(&index_abs) {
            Ok(text) => text,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                issues.push(
                    Issue::new(
                        &index_rel,
                        "index_sync",
                        Severity::Fail,
                        format!("missing index for directory '{}'", dir.display()),
                    )
                    .with_suggestion("run 'fol index --write'"),
                );
                continue;
            }
            Err(error) => {
                // Read anomaly: reported as a fail on the index file, the
                // batch keeps going.
                issues.push(Issue::new(
                    &index_rel,
                    "index_sync",
                    Severity::Fail,
                    format!("unreadable index: {error}"),
                ));
                continue;
            }
        };

        let actual = parse_entries(&existing);
        if actual != expected {
            issues.push(
                Issue::new(
                    &index_rel,
                    "index_sync",
                    Severity::Fail,
                    describe_drift(&expected, &actual),
                )
                .with_suggestion("run 'fol index --write'"),
            );
        }

        if extract_preamble(&existing).is_none() {
            issues.push(Issue::new(
                &index_rel,
                "index_preamble",
                Severity::Warn,
                "index has no preamble block",
            ));
        }
    }
    issues
}

fn describe_drift(
    expected: &[folio_index::IndexEntry],
    actual: &[folio_index::IndexEntry],
) -> String {
    let missing: Vec<&str> = expected
        .iter()
        .filter(|entry| !actual.contains(entry))
        .map(|entry| entry.rel_path.as_str())
        .collect();
    let stale: Vec<&str> = actual
        .iter()
        .filter(|entry| !expected.contains(entry))
        .map(|entry| entry.rel_path.as_str())
        .collect();

    match (missing.is_empty(), stale.is_empty()) {
        (false, false) => format!(
            "index out of sync (missing: {}; stale: {})",
            missing.join(", "),
            stale.join(", ")
        ),
        (false, true) => format!("index out of sync (missing: {})", missing.join(", ")),
        (true, false) => format!("index out of sync (stale: {})", stale.join(", ")),
        (true, true) => "index entries are out of order".to_string(),
    }
}

/// Paths and slugs must follow the type's directory pattern and kebab-case
/// file stems.
fn naming(corpus: &Corpus, registry: &SchemaRegistry) -> Vec<Issue> {
    let mut issues = Vec::new();
    for document in &corpus.documents {
        if document.doc_type == DocType::Unparseable {
            continue;
        }
        let Some(schema) = registry.get(document.doc_type) else {
            continue;
        };

        if !schema.path_matches(&document.path) {
            issues.push(
                Issue::new(
                    &document.path,
                    "naming",
                    Severity::Fail,
                    format!(
                        "{} documents belong under '{}'",
                        document.doc_type, schema.dir_pattern
                    ),
                )
                .with_suggestion("move the file or change its 'type'"),
            );
        }

        let stem = document
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !slug_is_valid(&stem) {
            issues.push(
                Issue::new(
                    &document.path,
                    "naming",
                    Severity::Fail,
                    format!("file stem '{stem}' is not a kebab-case slug"),
                )
                .with_suggestion("rename to lowercase words joined by single hyphens"),
            );
        }
    }
    issues
}
