use std::path::Path;
use std::process::ExitCode;

use folio_index::sync_all_indexes;
use folio_parser::load_corpus;
use serde::Serialize;

use crate::cli::{GlobalFlags, root_commands::IndexArgs};
use crate::output::output;

#[derive(Debug, Serialize)]
struct SyncRow {
    path: String,
    action: String,
    error: Option<String>,
}

/// Handle `fol index`.
pub fn handle(args: &IndexArgs, root: &Path, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let corpus = load_corpus(root);
    let results = sync_all_indexes(&corpus, args.write);

    let mut any_error = false;
    let rows: Vec<SyncRow> = results
        .into_iter()
        .map(|result| match result {
            Ok(outcome) => SyncRow {
                path: outcome.path.display().to_string(),
                action: format!("{:?}", outcome.action).to_lowercase(),
                error: None,
            },
            Err(error) => {
                any_error = true;
                let folio_index::IndexError::Io { ref path, .. } = error;
                SyncRow {
                    path: path.display().to_string(),
                    action: "error".to_string(),
                    error: Some(error.to_string()),
                }
            }
        })
        .collect();

    output(&rows, flags.format)?;
    if any_error {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
