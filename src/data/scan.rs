//! Recursive discovery of CSV files under a root directory

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::table::CSV_EXTENSION;
use crate::error::Result;

/// List every `.csv` file below `root`, recursively, sorted by path
///
/// A root that is not a directory yields an empty list. Subdirectories that
/// cannot be read are skipped. Symlinked directories are not descended into;
/// symlinked files are listed.
pub fn list_csv_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            // The root itself must be readable
            Err(e) if dir == root => return Err(e.into()),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            // file_type does not follow links
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                tracing::debug!(link = %path.display(), "not following directory symlink");
            } else if is_csv(&path) {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_scan_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("b").join("deep");
        fs::create_dir_all(&nested).unwrap();
        File::create(dir.path().join("c.csv")).unwrap();
        File::create(dir.path().join("a.CSV")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(nested.join("z.csv")).unwrap();

        let files = list_csv_files(dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("a.CSV"),
                nested.join("z.csv"),
                dir.path().join("c.csv"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("c.csv")).unwrap();
        symlink(dir.path(), dir.path().join("loop")).unwrap();
        symlink(dir.path(), dir.path().join("loop2")).unwrap();

        let files = list_csv_files(dir.path()).unwrap();

        assert_eq!(files, vec![dir.path().join("c.csv")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_lists_symlinked_files() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.csv")).unwrap();
        symlink(dir.path().join("a.csv"), dir.path().join("b.csv")).unwrap();

        let files = list_csv_files(dir.path()).unwrap();

        assert_eq!(files, vec![dir.path().join("a.csv"), dir.path().join("b.csv")]);
    }

    #[test]
    fn test_scan_of_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = list_csv_files(&dir.path().join("nowhere")).unwrap();
        assert!(files.is_empty());

        let files = list_csv_files(Path::new("")).unwrap();
        assert!(files.is_empty());
    }
}
