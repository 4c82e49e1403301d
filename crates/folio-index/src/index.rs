//! Per-directory `INDEX.md` generation and parsing.
//!
//! An index file has three regions: a title line, an optional hand-authored
//! preamble inside the fixed marker pair, and the generated entry table.
//! Regeneration never alters the markers or the preamble bytes between them.

use std::path::Path;

use folio_core::document::DocType;
use folio_parser::Corpus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const INDEX_FILE: &str = "INDEX.md";
pub const PREAMBLE_BEGIN: &str = "<!-- folio:preamble -->";
pub const PREAMBLE_END: &str = "<!-- /folio:preamble -->";

const TABLE_HEADER: &str = "| Name | Description | Path |";
const TABLE_SEPARATOR: &str = "| --- | --- | --- |";

/// One row of a directory index, derived from a child document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IndexEntry {
    pub name: String,
    pub description: String,
    /// Path relative to the directory holding the index file.
    pub rel_path: String,
}

/// Derive the expected entries for `dir` from its direct children, sorted by
/// name. Unparseable children carry no usable frontmatter and are skipped.
#[must_use]
pub fn entries_for_dir(corpus: &Corpus, dir: &Path) -> Vec<IndexEntry> {
    let mut entries: Vec<IndexEntry> = corpus
        .documents_in(dir)
        .filter(|doc| doc.doc_type != DocType::Unparseable)
        .map(|doc| {
            let rel_path = doc
                .path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            IndexEntry {
                name: doc.name().unwrap_or_default().to_string(),
                description: doc.description().unwrap_or_default().to_string(),
                rel_path,
            }
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Render the full index file text. Pure and idempotent: unchanged inputs
/// produce byte-identical output.
#[must_use]
pub fn generate_index(dir_title: &str, entries: &[IndexEntry], preamble: Option<&str>) -> String {
    let mut out = format!("# {dir_title}\n\n");

    if let Some(preamble) = preamble {
        out.push_str(PREAMBLE_BEGIN);
        out.push('\n');
        out.push_str(preamble);
        if !preamble.is_empty() && !preamble.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(PREAMBLE_END);
        out.push_str("\n\n");
    }

    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(TABLE_SEPARATOR);
    out.push('\n');
    for entry in entries {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(&entry.name),
            escape_cell(&entry.description),
            escape_cell(&entry.rel_path),
        ));
    }
    out
}

/// Extract the preamble between the marker pair, byte-for-byte. Returns
/// `None` when either marker is absent.
#[must_use]
pub fn extract_preamble(existing: &str) -> Option<&str> {
    let begin = existing.find(PREAMBLE_BEGIN)?;
    let after_begin = begin + PREAMBLE_BEGIN.len();
    let end = existing[after_begin..].find(PREAMBLE_END)?;
    let raw = &existing[after_begin..after_begin + end];
    // The marker lines themselves are not part of the preamble.
    Some(raw.strip_prefix('\n').unwrap_or(raw))
}

/// Parse the entry rows out of an existing index file's table region.
/// Anything inside the preamble markers is hand-authored and never counts
/// as an entry, even when it happens to be a three-column table.
#[must_use]
pub fn parse_entries(existing: &str) -> Vec<IndexEntry> {
    let table = match existing.find(PREAMBLE_END) {
        Some(end) => &existing[end + PREAMBLE_END.len()..],
        None => existing,
    };
    table
        .lines()
        .filter(|line| {
            line.starts_with('|') && *line != TABLE_HEADER && *line != TABLE_SEPARATOR
        })
        .filter_map(|line| {
            let cells: Vec<String> = line
                .trim_matches('|')
                .split(" | ")
                .map(|cell| unescape_cell(cell.trim()))
                .collect();
            match <[String; 3]>::try_from(cells) {
                Ok([name, description, rel_path]) => Some(IndexEntry {
                    name,
                    description,
                    rel_path,
                }),
                Err(_) => None,
            }
        })
        .collect()
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn unescape_cell(cell: &str) -> String {
    cell.replace("\\|", "|")
}
