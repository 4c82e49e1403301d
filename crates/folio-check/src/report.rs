//! Merged validation report for one run.

use folio_core::issue::{Issue, Severity};
use folio_parser::Corpus;
use folio_schema::SchemaRegistry;
use tracing::debug;

use crate::cross_file::run_cross_file;
use crate::per_file::validate_document;

/// The ordered issue list from a full validation pass.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub issues: Vec<Issue>,
}

impl Report {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.count(Severity::Fail) > 0
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warn) > 0
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

/// Run per-file validators over every document, then cross-file validators
/// over the completed corpus, and merge into one ordered report.
///
/// The corpus argument is the barrier: cross-file checks only ever see a
/// fully parsed document set.
#[must_use]
pub fn run_all(corpus: &Corpus, registry: &SchemaRegistry) -> Report {
    let mut issues: Vec<Issue> = corpus
        .documents
        .iter()
        .flat_map(|document| validate_document(document, registry))
        .collect();

    issues.extend(run_cross_file(corpus, registry));
    issues.sort_by_key(Issue::sort_key);

    debug!(count = issues.len(), "validation pass complete");
    Report { issues }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use folio_parser::load_corpus;
    use folio_schema::SchemaRegistry;
    use tempfile::TempDir;

    use super::run_all;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn clean_tree_produces_no_failures() {
        let dir = TempDir::new().unwrap();
        let body = format!("## Guidance\n{}\n## Pitfalls\nwatch out for the usual traps\n", "useful words ".repeat(30));
        write(
            dir.path(),
            "guides/alpha.md",
            &format!("---\ntype: guide\nname: alpha\ndescription: about alpha\n---\n{body}"),
        );
        write(
            dir.path(),
            "guides/INDEX.md",
            "# guides\n\n<!-- folio:preamble -->\nCurated guides.\n<!-- /folio:preamble -->\n\n| Name | Description | Path |\n| --- | --- | --- |\n| alpha | about alpha | alpha.md |\n",
        );

        let report = run_all(&load_corpus(dir.path()), &SchemaRegistry::new());
        assert!(!report.has_failures(), "unexpected: {:#?}", report.issues);
        assert!(!report.has_warnings(), "unexpected: {:#?}", report.issues);
    }

    #[test]
    fn issues_are_sorted_by_file_then_severity() {
        let dir = TempDir::new().unwrap();
        // alpha: fine except word count (warn). broken: parse fail.
        write(
            dir.path(),
            "guides/alpha.md",
            "---\ntype: guide\nname: alpha\ndescription: about alpha\n---\n## Guidance\nshort\n## Pitfalls\nshort\n",
        );
        write(dir.path(), "guides/broken.md", "no header\n");

        let report = run_all(&load_corpus(dir.path()), &SchemaRegistry::new());
        let positions: Vec<_> = report
            .issues
            .iter()
            .map(|issue| issue.file.clone())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert!(report.has_failures());
    }
}
