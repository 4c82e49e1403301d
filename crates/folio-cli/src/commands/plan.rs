use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use folio_core::responses::TransitionResponse;
use folio_core::status::PlanStatus;
use folio_parser::{load_corpus, render_document};

use crate::cli::{
    GlobalFlags,
    root_commands::{PlanCommands, PlanStatusArgs},
};
use crate::output::output;

/// Handle `fol plan`.
pub fn handle(action: &PlanCommands, root: &Path, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    match action {
        PlanCommands::Status(args) => status(args, root, flags),
    }
}

fn status(args: &PlanStatusArgs, root: &Path, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let target: PlanStatus = args
        .target
        .parse()
        .map_err(|reason: String| anyhow::anyhow!(reason))?;

    let rel_path = PathBuf::from(&args.path);
    let corpus = load_corpus(root);
    let document = corpus
        .get(&rel_path)
        .with_context(|| format!("no document at '{}'", rel_path.display()))?;

    let from = document
        .status()
        .context("document has no readable status")?;
    let rewritten = folio_fix::transition(document, target, Utc::now())?;

    let text = render_document(&rewritten.frontmatter, &rewritten.sections);
    let abs_path = root.join(&rel_path);
    std::fs::write(&abs_path, text)
        .with_context(|| format!("failed to write '{}'", abs_path.display()))?;

    let response = TransitionResponse {
        path: rel_path,
        from,
        to: target,
        updated: rewritten
            .frontmatter
            .get_scalar("updated")
            .unwrap_or_default()
            .to_string(),
    };
    output(&response, flags.format)?;
    Ok(ExitCode::SUCCESS)
}
