//! File deleter — exact base-name matching, files only.
//!
//! A directory is never deleted here even when its name matches; only file
//! entries from the scan snapshot are considered. The snapshot can be stale
//! by delete time, so a vanished file is skipped and recorded rather than
//! failing the batch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::rename::{SkipReason, SkippedItem};
use crate::scan::{self, Entry};

/// Result of a delete pass over one subtree.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveReport {
    pub removed: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,
    pub dry_run: bool,
}

/// Delete every file under `root` whose base name equals `name` exactly.
///
/// Matches at every depth are all deleted; there is no first-match shortcut.
/// With `dry_run` the matches are reported and nothing is removed. Matched
/// paths come back in scan order (deepest-first).
pub fn remove_by_name(root: &Path, name: &str, dry_run: bool) -> Result<RemoveReport> {
    if name.is_empty() {
        return Err(Error::validation_invalid_argument(
            "name",
            "File name must not be empty",
        ));
    }

    let entries = scan::scan(root)?;
    remove_entries(&entries, name, dry_run)
}

/// Apply the delete over an already-taken snapshot.
///
/// Split out from [`remove_by_name`] so the stale-snapshot policy is
/// testable: a matched file that no longer exists is skipped with
/// `Vanished` and the batch continues.
pub(crate) fn remove_entries(
    entries: &[Entry],
    name: &str,
    dry_run: bool,
) -> Result<RemoveReport> {
    let mut removed = Vec::new();
    let mut skipped = Vec::new();

    for entry in entries {
        if entry.is_dir || entry.file_name() != name {
            continue;
        }

        if !dry_run {
            match fs::remove_file(&entry.path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log_status!(
                        "remove",
                        "Skipping {}: file vanished before deletion",
                        entry.path.display()
                    );
                    skipped.push(SkippedItem {
                        path: entry.path.clone(),
                        reason: SkipReason::Vanished,
                    });
                    continue;
                }
                Err(e) => {
                    return Err(Error::internal_io(
                        e.to_string(),
                        Some(format!("delete {}", entry.path.display())),
                    ));
                }
            }
        }

        removed.push(entry.path.clone());
    }

    Ok(RemoveReport {
        removed,
        skipped,
        dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    fn tree_with_duplicates() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("file_delete.txt"), "one").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/file_delete.txt"), "two").unwrap();
        std::fs::write(dir.path().join("sub/keep.txt"), "keep").unwrap();
        dir
    }

    #[test]
    fn empty_name_is_invalid_argument() {
        let dir = tempdir().unwrap();
        let err = remove_by_name(dir.path(), "", false).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn missing_root_is_root_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = remove_by_name(&missing, "x.txt", false).unwrap_err();
        assert_eq!(err.code, ErrorCode::FsRootNotFound);
    }

    #[test]
    fn removes_every_match_at_every_depth() {
        let dir = tree_with_duplicates();
        let report = remove_by_name(dir.path(), "file_delete.txt", false).unwrap();

        assert_eq!(report.removed.len(), 2);
        // Scan order: deeper match first.
        assert_eq!(report.removed[0], dir.path().join("sub/file_delete.txt"));
        assert_eq!(report.removed[1], dir.path().join("file_delete.txt"));
        assert!(!dir.path().join("file_delete.txt").exists());
        assert!(!dir.path().join("sub/file_delete.txt").exists());
        assert!(dir.path().join("sub/keep.txt").exists());
    }

    #[test]
    fn absent_name_returns_empty_without_error() {
        let dir = tree_with_duplicates();
        let report = remove_by_name(dir.path(), "no_such.txt", false).unwrap();
        assert!(report.removed.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn exact_match_only_no_substring_semantics() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::write(dir.path().join("notes.txt.bak"), "x").unwrap();

        let report = remove_by_name(dir.path(), "notes.txt", false).unwrap();
        assert_eq!(report.removed.len(), 1);
        assert!(dir.path().join("notes.txt.bak").exists());
    }

    #[test]
    fn directories_are_never_deleted() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("trash")).unwrap();
        std::fs::write(dir.path().join("trash/trash"), "x").unwrap();

        // The inner file matches; the directory of the same name does not.
        let report = remove_by_name(dir.path(), "trash", false).unwrap();
        assert_eq!(report.removed.len(), 1);
        assert!(dir.path().join("trash").is_dir());
    }

    #[test]
    fn dry_run_reports_without_deleting() {
        let dir = tree_with_duplicates();
        let report = remove_by_name(dir.path(), "file_delete.txt", true).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.removed.len(), 2);
        assert!(dir.path().join("file_delete.txt").exists());
        assert!(dir.path().join("sub/file_delete.txt").exists());
    }

    #[test]
    fn vanished_file_is_skipped_and_batch_continues() {
        let dir = tree_with_duplicates();
        let entries = crate::scan::scan(dir.path()).unwrap();

        // Stale snapshot: one match disappears before the delete pass runs.
        std::fs::remove_file(dir.path().join("sub/file_delete.txt")).unwrap();

        let report = remove_entries(&entries, "file_delete.txt", false).unwrap();

        assert_eq!(report.removed, vec![dir.path().join("file_delete.txt")]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::Vanished);
        assert_eq!(report.skipped[0].path, dir.path().join("sub/file_delete.txt"));
    }
}
