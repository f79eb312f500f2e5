use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

/// One listing of a category's base directory.
///
/// `entry_count` counts every directory entry (hidden files, subdirectories,
/// unrelated files). `files` only holds names that resolve to regular files.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirectorySnapshot {
    entry_count: usize,
    files: BTreeSet<OsString>,
}

impl DirectorySnapshot {
    /// List `path` once. A missing or unreadable directory is an error.
    pub fn read(path: &Path) -> io::Result<Self> {
        let mut entry_count = 0;
        let mut files = BTreeSet::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            entry_count += 1;
            // Follow symlinks so a link to a regular file counts as present.
            let is_file = fs::metadata(entry.path())
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if is_file {
                files.insert(entry.file_name());
            }
        }
        Ok(DirectorySnapshot { entry_count, files })
    }

    /// Snapshot assembled from known contents, for callers that already
    /// hold a listing.
    pub fn from_listing<I, S>(entry_count: usize, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        DirectorySnapshot {
            entry_count,
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Exact, case-sensitive lookup of a regular file name.
    pub fn contains_file(&self, file_name: &str) -> bool {
        self.files.contains(OsStr::new(file_name))
    }
}

/// Whether a regular file named exactly `file_name` sits directly under
/// `base_dir`. Absence of either the directory or the file yields `false`.
///
/// The name is matched against the directory listing rather than probed with
/// `Path::exists`, so case-insensitive filesystems cannot report a near miss.
pub fn check_existence(base_dir: &Path, file_name: &str) -> bool {
    DirectorySnapshot::read(base_dir)
        .map(|snapshot| snapshot.contains_file(file_name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn counts_every_entry_but_tracks_only_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let snapshot = DirectorySnapshot::read(dir.path()).unwrap();
        assert_eq!(snapshot.entry_count(), 3);
        assert!(snapshot.contains_file("a.md"));
        assert!(snapshot.contains_file(".hidden"));
        assert!(!snapshot.contains_file("nested"));
    }

    #[test]
    fn missing_directory_is_an_error_for_snapshots_only() {
        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent");
        let err = DirectorySnapshot::read(&absent).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!check_existence(&absent, "a.md"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_count_and_dangling_links_do_not() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("real.md"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real.md"), dir.path().join("link.md"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.md"), dir.path().join("dangling.md"))
            .unwrap();

        let snapshot = DirectorySnapshot::read(dir.path()).unwrap();
        assert_eq!(snapshot.entry_count(), 3);
        assert!(snapshot.contains_file("link.md"));
        assert!(!snapshot.contains_file("dangling.md"));
    }
}
