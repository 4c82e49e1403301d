use std::path::Path;
use std::process::ExitCode;

use folio_config::FolioConfig;
use folio_core::responses::CheckResponse;
use folio_parser::load_corpus;
use folio_schema::SchemaRegistry;

use crate::cli::{GlobalFlags, root_commands::CheckArgs};
use crate::output::output;

/// Handle `fol check`.
pub fn handle(
    args: &CheckArgs,
    root: &Path,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    let registry = SchemaRegistry::new();
    let corpus = load_corpus(root);
    let report = folio_check::run_all(&corpus, &registry);

    let failed = report.has_failures();
    let strict = args.strict || config.check.strict;
    let warned = report.has_warnings();

    let response = CheckResponse::from_issues(root.to_path_buf(), corpus.len(), report.issues);
    output(&response, flags.format)?;

    if failed || (strict && warned) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
