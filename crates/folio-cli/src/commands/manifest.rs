use std::path::Path;
use std::process::ExitCode;

use folio_index::sync_manifest;
use folio_parser::load_corpus;

use crate::cli::{GlobalFlags, root_commands::ManifestArgs};
use crate::output::output;

/// Handle `fol manifest`.
pub fn handle(args: &ManifestArgs, root: &Path, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let corpus = load_corpus(root);

    match sync_manifest(&corpus, args.write) {
        Ok(outcome) => {
            output(&outcome, flags.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("fol manifest: {error}");
            Ok(ExitCode::FAILURE)
        }
    }
}
