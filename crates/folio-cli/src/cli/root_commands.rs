use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate the document tree and report issues.
    Check(CheckArgs),
    /// Apply auto-fixes for fixable issues.
    Fix(FixArgs),
    /// Show or write per-directory INDEX.md files.
    Index(IndexArgs),
    /// Show or write the tree-wide MANIFEST.md.
    Manifest(ManifestArgs),
    /// Plan lifecycle operations.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Arguments for `fol check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Treat warnings as failures for the exit code.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `fol fix`.
#[derive(Clone, Debug, Args)]
pub struct FixArgs {
    /// Report what would change without writing any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `fol index`.
#[derive(Clone, Debug, Args)]
pub struct IndexArgs {
    /// Write regenerated indexes instead of only reporting drift.
    #[arg(long)]
    pub write: bool,
}

/// Arguments for `fol manifest`.
#[derive(Clone, Debug, Args)]
pub struct ManifestArgs {
    /// Write the regenerated manifest instead of only reporting drift.
    #[arg(long)]
    pub write: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Transition a plan document to a new lifecycle status.
    Status(PlanStatusArgs),
}

/// Arguments for `fol plan status`.
#[derive(Clone, Debug, Args)]
pub struct PlanStatusArgs {
    /// Root-relative path of the plan document.
    pub path: String,
    /// Target status: draft, active, complete, abandoned.
    pub target: String,
}

/// Arguments for `fol schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name to dump; lists all names when omitted.
    pub name: Option<String>,
}
