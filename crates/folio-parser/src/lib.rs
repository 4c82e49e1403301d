//! # folio-parser
//!
//! Parsing layer for Folio: the frontmatter codec, level-2 section
//! segmentation, and the corpus loader.
//!
//! The codec handles a restricted header subset only: string scalars, lists
//! of string scalars, and (tolerated, flagged downstream) lists of single-key
//! mappings. Everything else is a [`ParseError`], never a panic. The loader
//! turns a directory tree into a [`Corpus`]; a file that fails to parse
//! becomes an inert `Unparseable` document rather than aborting the walk.

mod codec;
mod loader;
mod sections;

pub use codec::{ParseError, decode, encode};
pub use loader::{Corpus, load_corpus};
pub use sections::{render_document, split_sections};
