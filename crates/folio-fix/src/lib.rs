//! # folio-fix
//!
//! The opt-in write passes: the auto-fix engine and the plan lifecycle
//! transition.
//!
//! The fix engine maps a fixable issue name to a deterministic rewrite via
//! an explicit dispatch table. Every applied fix is re-parsed and
//! re-validated before anything reaches disk; a fix that does not clear its
//! own issue is reported as failed, distinct from "no fix available". One
//! file's failure never aborts the rest of the batch.

mod engine;
mod lifecycle;

pub use engine::{
    FileFixReport, FixOutcome, FixRecord, apply_fix, fix_available, fix_corpus, fix_file,
};
pub use lifecycle::transition;
