//! # folio-index
//!
//! Derived listing files for a Folio document tree: one `INDEX.md` per
//! directory and a tree-wide `MANIFEST.md`.
//!
//! Generation is a pure, idempotent function of the corpus: the same inputs
//! always produce byte-identical output. Hand-authored preamble text inside
//! the fixed marker pair survives regeneration verbatim, and the manifest
//! only ever rewrites its marked region. Write operations compare against
//! the bytes already on disk and skip the write when nothing changed.

mod error;
mod index;
mod manifest;
mod sync;

pub use error::IndexError;
pub use index::{
    INDEX_FILE, IndexEntry, PREAMBLE_BEGIN, PREAMBLE_END, entries_for_dir, extract_preamble,
    generate_index, parse_entries,
};
pub use manifest::{
    MANIFEST_BEGIN, MANIFEST_END, MANIFEST_FILE, append_manifest, generate_manifest,
    splice_manifest,
};
pub use sync::{SyncAction, SyncOutcome, sync_all_indexes, sync_index, sync_manifest};
