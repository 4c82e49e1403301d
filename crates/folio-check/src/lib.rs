//! # folio-check
//!
//! Validators for a Folio corpus.
//!
//! Per-file validators are pure functions dispatched from an explicit table;
//! each runs only for documents whose type is applicable. Cross-file
//! validators run once over the fully loaded corpus (a hard barrier: no
//! cross-file check starts before every file has been parsed) and never
//! mutate anything.
//!
//! No validator raises for an expected condition. Internal anomalies are
//! converted to a `fail` issue attributed to the owning file.

mod cross_file;
mod per_file;
mod report;

pub use cross_file::run_cross_file;
pub use per_file::{PER_FILE_VALIDATORS, validate_document, validator_by_name};
pub use report::{Report, run_all};
