//! Write-if-changed synchronization of derived listing files.
//!
//! Each sync computes the expected text, compares it against what is on
//! disk, and writes only on difference so untouched files keep their
//! modification timestamps. One file's IO failure never aborts the batch.

use std::path::{Path, PathBuf};

use folio_parser::Corpus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndexError;
use crate::index::{INDEX_FILE, entries_for_dir, extract_preamble, generate_index};
use crate::manifest::{
    MANIFEST_FILE, append_manifest, fresh_manifest, generate_manifest, splice_manifest,
};

/// What a sync did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
    UpToDate,
    Written,
    Created,
}

/// Result of syncing one derived file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SyncOutcome {
    /// Root-relative path of the derived file.
    pub path: PathBuf,
    pub action: SyncAction,
}

/// Sync the `INDEX.md` of one directory (root-relative `dir`).
///
/// Reads any existing index to carry its preamble forward, then writes the
/// regenerated text only when it differs.
///
/// # Errors
///
/// Returns [`IndexError::Io`] when the existing file cannot be read or the
/// new text cannot be written.
pub fn sync_index(corpus: &Corpus, dir: &Path, write: bool) -> Result<SyncOutcome, IndexError> {
    let rel_path = dir.join(INDEX_FILE);
    let abs_path = corpus.root.join(&rel_path);

    let existing = read_optional(&abs_path)?;
    let preamble = existing.as_deref().and_then(extract_preamble);

    let entries = entries_for_dir(corpus, dir);
    let title = dir
        .file_name()
        .map_or_else(|| ".".to_string(), |name| name.to_string_lossy().into_owned());
    let expected = generate_index(&title, &entries, preamble);

    finish(&abs_path, rel_path, existing.as_deref(), &expected, write)
}

/// Sync every directory index in the corpus. Failures are collected per
/// file; the batch always runs to completion.
pub fn sync_all_indexes(corpus: &Corpus, write: bool) -> Vec<Result<SyncOutcome, IndexError>> {
    corpus
        .directories()
        .iter()
        .map(|dir| sync_index(corpus, dir, write))
        .collect()
}

/// Sync the tree-wide `MANIFEST.md`, rewriting only the marked region of an
/// existing file. A hand-authored manifest without markers is kept verbatim
/// and gets the marked region appended.
///
/// # Errors
///
/// Returns [`IndexError::Io`] when the existing file cannot be read or the
/// new text cannot be written.
pub fn sync_manifest(corpus: &Corpus, write: bool) -> Result<SyncOutcome, IndexError> {
    let rel_path = PathBuf::from(MANIFEST_FILE);
    let abs_path = corpus.root.join(&rel_path);

    let existing = read_optional(&abs_path)?;
    let region = generate_manifest(corpus);
    let expected = match existing.as_deref() {
        Some(text) => match splice_manifest(text, &region) {
            Some(spliced) => spliced,
            None => append_manifest(text, &region),
        },
        None => fresh_manifest(&region),
    };

    finish(&abs_path, rel_path, existing.as_deref(), &expected, write)
}

fn read_optional(path: &Path) -> Result<Option<String>, IndexError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(IndexError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn finish(
    abs_path: &Path,
    rel_path: PathBuf,
    existing: Option<&str>,
    expected: &str,
    write: bool,
) -> Result<SyncOutcome, IndexError> {
    let action = match existing {
        Some(current) if current == expected => SyncAction::UpToDate,
        Some(_) => SyncAction::Written,
        None => SyncAction::Created,
    };

    if write && action != SyncAction::UpToDate {
        std::fs::write(abs_path, expected).map_err(|source| IndexError::Io {
            path: abs_path.to_path_buf(),
            source,
        })?;
        debug!(path = %abs_path.display(), ?action, "derived file written");
    }

    Ok(SyncOutcome {
        path: rel_path,
        action,
    })
}
