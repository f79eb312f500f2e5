//! Filesystem-facing operations behind the explorer: directory listings,
//! existence checks, statistics and report assembly.

use std::io;
use std::path::PathBuf;

use guide_explorer_catalog::{Catalog, CategoryKind};
use guide_explorer_config::Config;
use thiserror::Error;
use tracing::debug;

mod report;
mod scan;
mod stats;

pub use report::{EntryStatus, PhaseReport, Report, TreeSnapshot};
pub use scan::{check_existence, DirectorySnapshot};
pub use stats::{
    Stats, HOURS_PER_GUIDE, HOURS_PER_LESSON, HOURS_PER_RESOURCE, TOP_LEVEL_FILES,
};

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("failed to list {kind} directory {path}: {source}")]
    Io {
        kind: CategoryKind,
        path: PathBuf,
        source: io::Error,
    },
}

/// Operation bundle bound to one configuration and catalog.
pub struct Operations {
    config: Config,
    catalog: &'static Catalog,
}

impl Operations {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            catalog: Catalog::builtin(),
        }
    }

    /// Presence of `file_name` directly inside the base directory of `kind`.
    pub fn check_existence(&self, kind: CategoryKind, file_name: &str) -> bool {
        check_existence(&self.config.category_dir(kind), file_name)
    }

    /// List one category's base directory.
    pub fn scan(&self, kind: CategoryKind) -> Result<DirectorySnapshot, OperationError> {
        let path = self.config.category_dir(kind);
        let snapshot = DirectorySnapshot::read(&path).map_err(|source| OperationError::Io {
            kind,
            path: path.clone(),
            source,
        })?;
        debug!(
            category = %kind,
            path = %path.display(),
            entries = snapshot.entry_count(),
            "scanned base directory"
        );
        Ok(snapshot)
    }

    /// List all three base directories, lessons first. The first failure aborts.
    pub fn snapshot(&self) -> Result<TreeSnapshot, OperationError> {
        Ok(TreeSnapshot {
            lessons: self.scan(CategoryKind::Lessons)?,
            guides: self.scan(CategoryKind::Guides)?,
            resources: self.scan(CategoryKind::Resources)?,
        })
    }

    pub fn compute_stats(&self) -> Result<Stats, OperationError> {
        Ok(self.snapshot()?.stats())
    }

    /// Take a fresh snapshot and pair it with the catalog.
    pub fn report(&self) -> Result<Report, OperationError> {
        let snapshot = self.snapshot()?;
        let report = Report::build(self.catalog, &snapshot);
        for (kind, status) in report.missing() {
            debug!(category = %kind, file = status.file, "catalog entry missing on disk");
        }
        Ok(report)
    }
}
