//! Directory scanner — one static snapshot of a subtree, deepest-first.
//!
//! Every mutating operation in this crate consumes a snapshot taken here
//! before it touches the filesystem. Entries are ordered so that a directory
//! always comes after its own descendants, which lets the renamer process
//! children before their parent without invalidating precomputed paths.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Entry returned from a directory scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    /// Base name of the entry, lossy-decoded.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Number of path components, the depth key for deepest-first ordering.
pub(crate) fn depth(path: &Path) -> usize {
    path.components().count()
}

/// Recursively scan `root` and return every descendant entry.
///
/// Fails with `fs.root_not_found` if `root` does not exist and
/// `fs.not_a_directory` if it exists but is a file. Entries come back
/// deepest-first: descending component count, ties broken by lexical path
/// order so the result is deterministic within a run.
pub fn scan(root: &Path) -> Result<Vec<Entry>> {
    if !root.exists() {
        return Err(Error::root_not_found(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(Error::not_a_directory(root.display().to_string()));
    }

    let mut entries = Vec::new();
    walk_recursive(root, &mut entries)?;

    // Children must sort before their parent; lexical tiebreak keeps
    // equal-depth ordering stable across runs.
    entries.sort_by(|a, b| {
        depth(&b.path)
            .cmp(&depth(&a.path))
            .then_with(|| a.path.cmp(&b.path))
    });

    Ok(entries)
}

fn walk_recursive(dir: &Path, entries: &mut Vec<Entry>) -> Result<()> {
    let read = fs::read_dir(dir)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("list {}", dir.display()))))?;

    for entry in read.flatten() {
        let path = entry.path();
        let is_dir = path.is_dir();
        if is_dir {
            walk_recursive(&path, entries)?;
        }
        entries.push(Entry { path, is_dir });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    fn sample_tree() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("file1.txt"), "content1").unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/doc1.txt"), "document content").unwrap();
        std::fs::create_dir(dir.path().join("backup")).unwrap();
        std::fs::write(dir.path().join("backup/old_file.txt"), "old content").unwrap();
        std::fs::create_dir(dir.path().join("backup/nested")).unwrap();
        std::fs::write(dir.path().join("backup/nested/nested_file.txt"), "nested").unwrap();
        dir
    }

    #[test]
    fn scan_missing_root_is_root_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does_not_exist");

        let err = scan(&missing).unwrap_err();
        assert_eq!(err.code, ErrorCode::FsRootNotFound);
    }

    #[test]
    fn scan_file_root_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let err = scan(&file).unwrap_err();
        assert_eq!(err.code, ErrorCode::FsNotADirectory);
    }

    #[test]
    fn scan_empty_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(scan(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn scan_counts_files_and_dirs_at_all_depths() {
        let dir = sample_tree();
        let entries = scan(dir.path()).unwrap();

        // 4 files + 3 directories
        assert_eq!(entries.len(), 7);
        assert_eq!(entries.iter().filter(|e| !e.is_dir).count(), 4);
        assert_eq!(entries.iter().filter(|e| e.is_dir).count(), 3);
    }

    #[test]
    fn scan_orders_deepest_first() {
        let dir = sample_tree();
        let entries = scan(dir.path()).unwrap();

        for pair in entries.windows(2) {
            assert!(
                depth(&pair[0].path) >= depth(&pair[1].path),
                "{} listed before shallower {}",
                pair[0].path.display(),
                pair[1].path.display()
            );
        }

        // A directory must come after everything inside it.
        let backup_pos = entries
            .iter()
            .position(|e| e.path == dir.path().join("backup"))
            .unwrap();
        let nested_file_pos = entries
            .iter()
            .position(|e| e.path == dir.path().join("backup/nested/nested_file.txt"))
            .unwrap();
        assert!(nested_file_pos < backup_pos);
    }

    #[test]
    fn scan_is_deterministic() {
        let dir = sample_tree();
        let first = scan(dir.path()).unwrap();
        let second = scan(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
