//! Shared test harness utilities for guide-explorer crates.

use std::fs;
use std::path::{Path, PathBuf};

use guide_explorer_catalog::{Catalog, CatalogEntry, CategoryKind};
use guide_explorer_config::Config;
use tempfile::TempDir;

/// Returns a baseline configuration rooted at `root`.
pub fn test_config(root: impl Into<PathBuf>) -> Config {
    Config::with_root(root)
}

/// Temporary documentation tree laid out with the default directory names.
pub struct DocsTree {
    temp: TempDir,
}

impl DocsTree {
    /// Tree with all three category directories present and empty.
    pub fn new() -> Self {
        let tree = Self::bare();
        for kind in CategoryKind::ALL {
            fs::create_dir_all(tree.dir(kind)).expect("create category directory");
        }
        tree
    }

    /// Tree with no category directories at all.
    pub fn bare() -> Self {
        DocsTree {
            temp: TempDir::new().expect("tempdir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn dir(&self, kind: CategoryKind) -> PathBuf {
        self.root().join(kind.default_dir_name())
    }

    pub fn config(&self) -> Config {
        test_config(self.root())
    }

    /// Create an empty file named `name` inside the directory for `kind`.
    pub fn touch(&self, kind: CategoryKind, name: &str) -> &Self {
        let path = self.dir(kind).join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directory");
        }
        fs::write(&path, format!("# {name}\n")).expect("write file");
        self
    }

    pub fn touch_entries<'a, I>(&self, kind: CategoryKind, entries: I) -> &Self
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        for entry in entries {
            self.touch(kind, entry.file_name);
        }
        self
    }

    /// Write every file the catalog references.
    pub fn populate(&self, catalog: &Catalog) -> &Self {
        for kind in CategoryKind::ALL {
            self.touch_entries(kind, catalog.entries(kind));
        }
        self
    }

    pub fn remove_dir(&self, kind: CategoryKind) -> &Self {
        fs::remove_dir_all(self.dir(kind)).expect("remove category directory");
        self
    }
}

impl Default for DocsTree {
    fn default() -> Self {
        Self::new()
    }
}
