use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use fileorg::remove;
use fileorg::rename::SkippedItem;

use super::CmdResult;

#[derive(Args)]
pub struct RemoveArgs {
    /// Root directory to process
    pub path: PathBuf,

    /// Exact file name to delete (directories are never deleted)
    pub name: String,

    /// Show what would be deleted without touching the filesystem
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct RemoveOutput {
    pub command: &'static str,
    pub name: String,
    pub dry_run: bool,
    pub total_removed: usize,
    pub removed: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(args: RemoveArgs, _global: &super::GlobalArgs) -> CmdResult<RemoveOutput> {
    let report = remove::remove_by_name(&args.path, &args.name, args.dry_run)?;

    let mut hints = Vec::new();
    if report.removed.is_empty() && report.skipped.is_empty() {
        hints.push("No files with that name were found.".to_string());
    }

    Ok((
        RemoveOutput {
            command: "remove",
            name: args.name,
            dry_run: report.dry_run,
            total_removed: report.removed.len(),
            removed: report.removed,
            skipped: report.skipped,
            hints,
        },
        0,
    ))
}
