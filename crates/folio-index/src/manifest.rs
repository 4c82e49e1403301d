//! Tree-wide `MANIFEST.md` generation.
//!
//! The manifest aggregates entries across the whole tree inside a fixed
//! marker pair. Regeneration rewrites only the marked region; hand-authored
//! content around it is untouched.

use folio_parser::Corpus;

use crate::index::{IndexEntry, entries_for_dir};

pub const MANIFEST_FILE: &str = "MANIFEST.md";
pub const MANIFEST_BEGIN: &str = "<!-- folio:manifest -->";
pub const MANIFEST_END: &str = "<!-- /folio:manifest -->";

/// Render the manifest region content: entries grouped by directory, in
/// directory order. Pure and idempotent.
#[must_use]
pub fn generate_manifest(corpus: &Corpus) -> String {
    let mut out = String::new();
    for dir in corpus.directories() {
        let entries = entries_for_dir(corpus, &dir);
        if entries.is_empty() {
            continue;
        }

        let title = if dir.as_os_str().is_empty() {
            ".".to_string()
        } else {
            dir.display().to_string()
        };
        out.push_str(&format!("## {title}\n\n"));
        for IndexEntry {
            name,
            description,
            rel_path,
        } in entries
        {
            let link = if dir.as_os_str().is_empty() {
                rel_path
            } else {
                format!("{}/{rel_path}", dir.display())
            };
            out.push_str(&format!("- [{name}]({link}): {description}\n"));
        }
        out.push('\n');
    }
    out
}

/// Replace the marked region of `existing` with `region`. Returns `None`
/// when either marker is missing; the caller decides whether to append a
/// new marked region ([`append_manifest`]) or start a fresh file.
#[must_use]
pub fn splice_manifest(existing: &str, region: &str) -> Option<String> {
    let begin = existing.find(MANIFEST_BEGIN)?;
    let after_begin = begin + MANIFEST_BEGIN.len();
    let end_offset = existing[after_begin..].find(MANIFEST_END)?;
    let end = after_begin + end_offset;

    let mut out = String::with_capacity(existing.len() + region.len());
    out.push_str(&existing[..after_begin]);
    out.push('\n');
    out.push_str(region);
    out.push_str(&existing[end..]);
    Some(out)
}

/// A complete manifest file for trees that do not have one yet.
#[must_use]
pub fn fresh_manifest(region: &str) -> String {
    format!("# Manifest\n\n{MANIFEST_BEGIN}\n{region}{MANIFEST_END}\n")
}

/// Add a marked region to the end of a manifest that has no markers yet.
/// The existing hand-authored text is kept verbatim, so a later sync can
/// splice the region in place.
#[must_use]
pub fn append_manifest(existing: &str, region: &str) -> String {
    let mut out = String::with_capacity(existing.len() + region.len() + 64);
    out.push_str(existing);
    if !existing.is_empty() && !existing.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(MANIFEST_BEGIN);
    out.push('\n');
    out.push_str(region);
    out.push_str(MANIFEST_END);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{append_manifest, fresh_manifest, splice_manifest};

    #[test]
    fn splice_preserves_surrounding_text() {
        let existing = "# My docs\n\nIntro paragraph.\n\n<!-- folio:manifest -->\nstale\n<!-- /folio:manifest -->\n\nFooter text.\n";
        let spliced = splice_manifest(existing, "## guides\n\n- [a](guides/a.md): first\n\n")
            .expect("markers present");

        assert!(spliced.starts_with("# My docs\n\nIntro paragraph.\n"));
        assert!(spliced.ends_with("<!-- /folio:manifest -->\n\nFooter text.\n"));
        assert!(spliced.contains("- [a](guides/a.md): first"));
        assert!(!spliced.contains("stale"));
    }

    #[test]
    fn splice_is_idempotent() {
        let region = "## guides\n\n- [a](guides/a.md): first\n\n";
        let once = splice_manifest(&fresh_manifest("old\n"), region).unwrap();
        let twice = splice_manifest(&once, region).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_markers_yield_none() {
        assert_eq!(splice_manifest("# No markers here\n", "region"), None);
    }

    #[test]
    fn append_keeps_existing_text_and_splices_cleanly_afterwards() {
        let region = "## guides\n\n- [a](guides/a.md): first\n\n";
        let appended = append_manifest("# Handbook\n\nIntro.\n", region);

        assert!(appended.starts_with("# Handbook\n\nIntro.\n\n<!-- folio:manifest -->\n"));
        assert!(appended.ends_with("<!-- /folio:manifest -->\n"));

        let respliced = splice_manifest(&appended, region).unwrap();
        assert_eq!(respliced, appended);
    }
}
