//! Item renamer — literal substring substitution over base names.
//!
//! Consumes a deepest-first scan snapshot and renames every entry whose base
//! name contains the search term. Children are processed before their parent
//! directory, so a precomputed child path is never invalidated by a parent
//! rename. Conflicts never abort the batch; they land in a structured
//! `skipped` list instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::scan::{self, Entry};

/// A rename that was applied (or would be, in dry-run).
#[derive(Debug, Clone, Serialize)]
pub struct RenameChange {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Why an entry was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The computed target path already exists on disk.
    TargetExists,
    /// The entry disappeared between scan and mutation.
    Vanished,
}

/// An entry that matched but was not mutated, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a rename pass over one subtree.
#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub changes: Vec<RenameChange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,
    pub dry_run: bool,
}

/// Rename every entry under `root` whose base name contains `search`,
/// replacing all occurrences with `replace`.
///
/// Substitution applies to the base name only, never to parent segments.
/// Entries whose name is unchanged by substitution are passed over silently.
/// An entry whose target already exists is skipped with a warning and
/// recorded in the report; the batch continues. With `dry_run` the same
/// filter and conflict logic runs against the snapshot with zero mutation.
pub fn rename_items(
    root: &Path,
    search: &str,
    replace: &str,
    dry_run: bool,
) -> Result<RenameReport> {
    if search.is_empty() {
        return Err(Error::validation_invalid_argument(
            "search",
            "Search substring must not be empty",
        ));
    }

    let entries = scan::scan(root)?;
    let mut changes = Vec::new();
    let mut skipped = Vec::new();

    for entry in &entries {
        let Some(new_path) = substituted_path(entry, search, replace) else {
            continue;
        };

        if new_path.exists() {
            log_status!(
                "rename",
                "Skipping {}: target {} already exists",
                entry.path.display(),
                new_path.display()
            );
            skipped.push(SkippedItem {
                path: entry.path.clone(),
                reason: SkipReason::TargetExists,
            });
            continue;
        }

        if !dry_run {
            fs::rename(&entry.path, &new_path).map_err(|e| {
                Error::internal_io(
                    e.to_string(),
                    Some(format!(
                        "rename {} -> {}",
                        entry.path.display(),
                        new_path.display()
                    )),
                )
            })?;
        }

        changes.push(RenameChange {
            from: entry.path.clone(),
            to: new_path,
        });
    }

    Ok(RenameReport {
        changes,
        skipped,
        dry_run,
    })
}

/// Compute the entry's post-substitution path, or `None` if the base name
/// does not change.
fn substituted_path(entry: &Entry, search: &str, replace: &str) -> Option<PathBuf> {
    let name = entry.file_name();
    let new_name = name.replace(search, replace);
    if new_name == name {
        return None;
    }

    let parent = entry.path.parent()?;
    Some(parent.join(new_name))
}
