use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use fileorg::rename::{self, RenameChange, SkippedItem};

use super::CmdResult;

#[derive(Args)]
pub struct RenameArgs {
    /// Root directory to process
    pub path: PathBuf,

    /// Substring to search for in file and directory names
    pub search: String,

    /// Replacement substring
    pub replace: String,

    /// Show what would change without touching the filesystem
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

#[derive(Serialize)]
pub struct RenameOutput {
    pub command: &'static str,
    pub search: String,
    pub replace: String,
    pub dry_run: bool,
    pub total_changed: usize,
    pub changes: Vec<RenameChange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

pub fn run(args: RenameArgs, _global: &super::GlobalArgs) -> CmdResult<RenameOutput> {
    let report = rename::rename_items(&args.path, &args.search, &args.replace, args.dry_run)?;

    let mut hints = Vec::new();
    if report.changes.is_empty() && report.skipped.is_empty() {
        hints.push("Nothing matched the search substring.".to_string());
    }
    if !report.skipped.is_empty() {
        hints.push(format!(
            "{} item(s) skipped; see the skipped list for reasons.",
            report.skipped.len()
        ));
    }

    Ok((
        RenameOutput {
            command: "rename",
            search: args.search,
            replace: args.replace,
            dry_run: report.dry_run,
            total_changed: report.changes.len(),
            changes: report.changes,
            skipped: report.skipped,
            hints,
        },
        0,
    ))
}
