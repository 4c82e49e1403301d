use std::process::ExitCode;

use anyhow::Context;
use folio_schema::JsonSchemaExport;

use crate::cli::{GlobalFlags, root_commands::SchemaArgs};
use crate::output::output;

/// Handle `fol schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let export = JsonSchemaExport::new();

    match &args.name {
        Some(name) => {
            let schema = export
                .get(name)
                .with_context(|| format!("unknown schema '{name}' (try 'fol schema')"))?;
            output(schema, flags.format)?;
        }
        None => {
            output(&export.list(), flags.format)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
