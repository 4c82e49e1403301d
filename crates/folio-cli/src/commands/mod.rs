use std::path::Path;
use std::process::ExitCode;

use folio_config::FolioConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod check;
pub mod fix;
pub mod index;
pub mod manifest;
pub mod plan;
pub mod schema;

/// Route a parsed command to its handler.
pub fn dispatch(
    command: Commands,
    root: &Path,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Check(args) => check::handle(&args, root, config, flags),
        Commands::Fix(args) => fix::handle(&args, root, flags),
        Commands::Index(args) => index::handle(&args, root, flags),
        Commands::Manifest(args) => manifest::handle(&args, root, flags),
        Commands::Plan { action } => plan::handle(&action, root, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
