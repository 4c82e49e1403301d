//! Corpus loader: one directory tree in, one parsed corpus out.
//!
//! The loader walks the target tree, parses every markdown file except the
//! derived listing files (`INDEX.md`, `MANIFEST.md`), and classifies each
//! document from its explicit `type` frontmatter key. A file that fails to
//! parse or classify becomes an inert `Unparseable` document; the walk never
//! aborts on one bad file. Every run re-parses from disk — there is no cache
//! across invocations.

use std::path::{Path, PathBuf};

use folio_core::document::{DocType, Document};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::codec;
use crate::sections::split_sections;

/// File names owned by the index synchronizer, not the document model.
pub const DERIVED_FILES: &[&str] = &["INDEX.md", "MANIFEST.md"];

/// The fully parsed document set for one run.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub root: PathBuf,
    /// Documents sorted by relative path.
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Look up a document by its root-relative path.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.path == path)
    }

    #[must_use]
    pub fn contains_path(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    /// Documents directly inside `dir` (non-recursive).
    pub fn documents_in(&self, dir: &Path) -> impl Iterator<Item = &Document> {
        self.documents
            .iter()
            .filter(move |doc| doc.path.parent() == Some(dir))
    }

    /// Sorted list of directories that directly contain documents.
    #[must_use]
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .documents
            .iter()
            .filter_map(|doc| doc.path.parent().map(Path::to_path_buf))
            .collect();
        dirs.sort();
        dirs.dedup();
        dirs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Walk `root` and parse every document into a [`Corpus`].
///
/// Hidden files and anything gitignored are skipped, matching how the rest
/// of the toolchain sees the tree.
#[must_use]
pub fn load_corpus(root: &Path) -> Corpus {
    let mut documents = Vec::new();

    let walker = WalkBuilder::new(root).build();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable walk entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }
        let file_name = path.file_name().and_then(|name| name.to_str());
        if file_name.is_some_and(|name| DERIVED_FILES.contains(&name)) {
            continue;
        }

        let rel_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        documents.push(load_document(path, rel_path));
    }

    documents.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(count = documents.len(), root = %root.display(), "corpus loaded");

    Corpus {
        root: root.to_path_buf(),
        documents,
    }
}

fn load_document(abs_path: &Path, rel_path: PathBuf) -> Document {
    let text = match std::fs::read_to_string(abs_path) {
        Ok(text) => text,
        Err(error) => {
            return Document::unparseable(rel_path, format!("unreadable file: {error}"));
        }
    };

    let (frontmatter, body) = match codec::decode(&text) {
        Ok(parsed) => parsed,
        Err(error) => return Document::unparseable(rel_path, error.to_string()),
    };

    let doc_type = match frontmatter.get_scalar("type") {
        Some(raw) => match raw.parse::<DocType>() {
            Ok(doc_type) => doc_type,
            Err(reason) => return Document::unparseable(rel_path, reason),
        },
        None => {
            return Document::unparseable(rel_path, "missing 'type' frontmatter key".to_string());
        }
    };

    Document {
        path: rel_path,
        doc_type,
        frontmatter,
        sections: split_sections(&body),
        parse_failure: None,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use folio_core::document::DocType;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::load_corpus;

    fn write(root: &Path, rel: &str, text: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    const GUIDE: &str = "---\ntype: guide\nname: sample\ndescription: a sample\n---\n## Guidance\ntext\n## Pitfalls\ntext\n";

    #[test]
    fn loads_and_classifies_documents() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "guides/sample.md", GUIDE);
        write(
            dir.path(),
            "plans/roll-out.md",
            "---\ntype: plan\nname: roll-out\ndescription: rollout plan\nstatus: draft\n---\n## Goal\ng\n## Approach\na\n## Steps\ns\n",
        );

        let corpus = load_corpus(dir.path());
        assert_eq!(corpus.len(), 2);

        let guide = corpus.get(Path::new("guides/sample.md")).unwrap();
        assert_eq!(guide.doc_type, DocType::Guide);
        assert_eq!(guide.sections.len(), 2);
    }

    #[test]
    fn derived_listing_files_are_excluded() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "guides/sample.md", GUIDE);
        write(dir.path(), "guides/INDEX.md", "# Index\n");
        write(dir.path(), "MANIFEST.md", "# Manifest\n");

        let corpus = load_corpus(dir.path());
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn bad_files_become_inert_unparseable_documents() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "guides/sample.md", GUIDE);
        write(dir.path(), "guides/no-header.md", "just text\n");
        write(
            dir.path(),
            "guides/odd-type.md",
            "---\ntype: recipe\nname: x\ndescription: y\n---\n",
        );
        write(dir.path(), "guides/untyped.md", "---\nname: x\n---\n");

        let corpus = load_corpus(dir.path());
        assert_eq!(corpus.len(), 4);

        for rel in ["guides/no-header.md", "guides/odd-type.md", "guides/untyped.md"] {
            let doc = corpus.get(Path::new(rel)).unwrap();
            assert_eq!(doc.doc_type, DocType::Unparseable, "{rel}");
            assert!(doc.parse_failure.is_some(), "{rel}");
        }
    }

    #[test]
    fn directories_lists_parents_once() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "guides/a.md", GUIDE);
        write(dir.path(), "guides/b.md", GUIDE);
        write(
            dir.path(),
            "notes/c.md",
            "---\ntype: note\nname: c\ndescription: scratch\n---\nsome words here\n",
        );

        let corpus = load_corpus(dir.path());
        let dirs = corpus.directories();
        assert_eq!(dirs, vec![Path::new("guides"), Path::new("notes")]);
    }
}
