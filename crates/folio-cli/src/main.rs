use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod output;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("fol error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = folio_config::FolioConfig::load_with_dotenv()
        .context("failed to load folio configuration")?;
    let format = resolve_format(cli.format, &config)?;
    let flags = cli.global_flags(format);
    let root = resolve_root(flags.root.as_deref(), &config)?;
    tracing::debug!(root = %root.display(), "resolved document tree root");

    commands::dispatch(cli.command, &root, &config, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Resolve the output format: explicit `--format` wins, otherwise the
/// configured `general.default_format`.
fn resolve_format(
    explicit: Option<cli::OutputFormat>,
    config: &folio_config::FolioConfig,
) -> anyhow::Result<cli::OutputFormat> {
    use clap::ValueEnum;

    match explicit {
        Some(format) => Ok(format),
        None => cli::OutputFormat::from_str(&config.general.default_format, true).map_err(|_| {
            anyhow::anyhow!(
                "invalid general.default_format '{}' (expected json, table, or raw)",
                config.general.default_format
            )
        }),
    }
}

/// Resolve the document tree root: explicit `--root`, else walk up from the
/// current directory to the nearest `.folio/` marker, else the configured
/// root relative to the current directory.
fn resolve_root(
    root_override: Option<&str>,
    config: &folio_config::FolioConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = root_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!("invalid --root '{}': directory does not exist", explicit.display());
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    let mut cursor = Some(start.as_path());
    while let Some(dir) = cursor {
        if dir.join(".folio").is_dir() {
            return Ok(dir.join(&config.general.root));
        }
        cursor = dir.parent();
    }

    Ok(start.join(&config.general.root))
}
