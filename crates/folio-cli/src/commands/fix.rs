use std::path::Path;
use std::process::ExitCode;

use folio_fix::{FixOutcome, fix_corpus};
use folio_parser::load_corpus;
use folio_schema::SchemaRegistry;

use crate::cli::{GlobalFlags, root_commands::FixArgs};
use crate::output::output;

/// Handle `fol fix`.
pub fn handle(args: &FixArgs, root: &Path, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let registry = SchemaRegistry::new();
    let corpus = load_corpus(root);
    let report = folio_check::run_all(&corpus, &registry);

    let file_reports = fix_corpus(&corpus, &report.issues, &registry, !args.dry_run);
    output(&file_reports, flags.format)?;

    let any_failed = file_reports.iter().any(|file| {
        file.write_error.is_some()
            || file
                .records
                .iter()
                .any(|record| matches!(record.outcome, FixOutcome::Failed { .. }))
    });

    if any_failed {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
