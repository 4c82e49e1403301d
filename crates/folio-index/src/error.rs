//! Index synchronizer error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from index/manifest synchronization.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The underlying read or write could not be completed. Aborts only the
    /// affected file, never the batch.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
