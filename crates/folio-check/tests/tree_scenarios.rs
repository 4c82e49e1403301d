//! End-to-end validation scenarios over realistic document trees.

use std::fs;
use std::path::Path;

use folio_core::issue::Severity;
use folio_parser::load_corpus;
use folio_schema::SchemaRegistry;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn body(sections: &[&str]) -> String {
    sections
        .iter()
        .map(|heading| format!("## {heading}\n{}\n", "useful words ".repeat(20)))
        .collect()
}

fn index_for(title: &str, rows: &[(&str, &str, &str)]) -> String {
    let mut text = format!(
        "# {title}\n\n<!-- folio:preamble -->\nHand-written notes.\n<!-- /folio:preamble -->\n\n| Name | Description | Path |\n| --- | --- | --- |\n"
    );
    for (name, description, path) in rows {
        text.push_str(&format!("| {name} | {description} | {path} |\n"));
    }
    text
}

/// A tree with one of everything, all consistent, validates clean.
#[test]
fn healthy_tree_has_no_failures() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "guides/error-handling.md",
        &format!(
            "---\ntype: guide\nname: error-handling\ndescription: How we report errors\nrelated:\n  - research/error-survey.md\n---\n{}",
            body(&["Guidance", "Pitfalls"])
        ),
    );
    write(
        dir.path(),
        "research/error-survey.md",
        &format!(
            "---\ntype: research\nname: error-survey\ndescription: Survey of error styles\nsources:\n  - https://example.com/errors\n---\n{}",
            body(&["Summary", "Findings"])
        ),
    );
    write(
        dir.path(),
        "plans/adopt-new-style.md",
        &format!(
            "---\ntype: plan\nname: adopt-new-style\ndescription: Adopt the new error style\nstatus: active\n---\n{}",
            body(&["Goal", "Approach", "Steps"])
        ),
    );
    write(
        dir.path(),
        "guides/INDEX.md",
        &index_for(
            "guides",
            &[("error-handling", "How we report errors", "error-handling.md")],
        ),
    );
    write(
        dir.path(),
        "research/INDEX.md",
        &index_for(
            "research",
            &[("error-survey", "Survey of error styles", "error-survey.md")],
        ),
    );
    write(
        dir.path(),
        "plans/INDEX.md",
        &index_for(
            "plans",
            &[(
                "adopt-new-style",
                "Adopt the new error style",
                "adopt-new-style.md",
            )],
        ),
    );

    let report = folio_check::run_all(&load_corpus(dir.path()), &SchemaRegistry::new());
    assert!(!report.has_failures(), "{:#?}", report.issues);
    assert!(!report.has_warnings(), "{:#?}", report.issues);
}

/// One broken corner of the tree produces attributable issues without
/// drowning out the healthy parts.
#[test]
fn mixed_tree_reports_each_problem_once() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "guides/error-handling.md",
        &format!(
            "---\ntype: guide\nname: error-handling\ndescription: How we report errors\nrelated:\n  - guides/logging.md\n---\n{}",
            body(&["Guidance", "Pitfalls"])
        ),
    );
    write(
        dir.path(),
        "research/thin-survey.md",
        &format!(
            "---\ntype: research\nname: thin-survey\ndescription: Needs sources\nsources: []\n---\n{}",
            body(&["Summary", "Findings"])
        ),
    );
    write(
        dir.path(),
        "guides/INDEX.md",
        &index_for(
            "guides",
            &[("error-handling", "How we report errors", "error-handling.md")],
        ),
    );
    write(
        dir.path(),
        "research/INDEX.md",
        &index_for(
            "research",
            &[("thin-survey", "Needs sources", "thin-survey.md")],
        ),
    );

    let report = folio_check::run_all(&load_corpus(dir.path()), &SchemaRegistry::new());

    let fails: Vec<_> = report
        .issues
        .iter()
        .filter(|issue| issue.severity == Severity::Fail)
        .collect();
    assert_eq!(fails.len(), 2, "{fails:#?}");
    assert!(
        fails
            .iter()
            .any(|issue| issue.validator == "related_links"
                && issue.message.contains("guides/logging.md"))
    );
    assert!(
        fails
            .iter()
            .any(|issue| issue.validator == "sources_required"
                && issue.file == Path::new("research/thin-survey.md"))
    );
}

/// Issues land in deterministic order so reports diff cleanly run to run.
#[test]
fn two_runs_produce_identical_reports() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "guides/one.md", "no header\n");
    write(dir.path(), "guides/two.md", "also no header\n");

    let registry = SchemaRegistry::new();
    let first = folio_check::run_all(&load_corpus(dir.path()), &registry);
    let second = folio_check::run_all(&load_corpus(dir.path()), &registry);
    assert_eq!(first.issues, second.issues);
}
