//! Level-2 section segmentation and document rendering.
//!
//! Section boundaries are `## ` headings at the start of a line. Text before
//! the first heading becomes an implicit preamble section with an empty
//! heading. `render_document` is the inverse used by the fix engine: encode
//! the frontmatter, then emit each section back in order.

use folio_core::document::Section;
use folio_core::frontmatter::Frontmatter;

use crate::codec;

/// Split a body into its level-2 sections.
///
/// A leading preamble (text before the first `## `) is kept as a section
/// with an empty heading; a blank preamble is dropped.
#[must_use]
pub fn split_sections(body: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut heading: Option<String> = None;
    let mut buffer = String::new();

    let mut flush = |heading: &mut Option<String>, buffer: &mut String, out: &mut Vec<Section>| {
        let text = std::mem::take(buffer);
        match heading.take() {
            Some(title) => out.push(Section::new(title, text)),
            None => {
                if !text.trim().is_empty() {
                    out.push(Section::new("", text));
                }
            }
        }
    };

    for line in body.lines() {
        if let Some(title) = line.strip_prefix("## ") {
            flush(&mut heading, &mut buffer, &mut sections);
            heading = Some(title.trim().to_string());
        } else {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
    flush(&mut heading, &mut buffer, &mut sections);

    sections
}

/// Render frontmatter and sections back into full file text.
///
/// Applying `decode` + [`split_sections`] to the output reproduces the same
/// frontmatter and sections, which is what the fix engine relies on when it
/// re-validates a rewritten document.
#[must_use]
pub fn render_document(frontmatter: &Frontmatter, sections: &[Section]) -> String {
    let mut out = codec::encode(frontmatter);
    for section in sections {
        if !section.is_preamble() {
            out.push_str("## ");
            out.push_str(&section.heading);
            out.push('\n');
        }
        out.push_str(&section.body);
        if !section.body.is_empty() && !section.body.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
