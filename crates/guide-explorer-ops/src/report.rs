use guide_explorer_catalog::{Catalog, CatalogEntry, CategoryKind};
use serde::Serialize;

use crate::scan::DirectorySnapshot;
use crate::stats::Stats;

/// Listings of all three base directories taken during one run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreeSnapshot {
    pub lessons: DirectorySnapshot,
    pub guides: DirectorySnapshot,
    pub resources: DirectorySnapshot,
}

impl TreeSnapshot {
    pub fn stats(&self) -> Stats {
        Stats::from_counts(
            self.lessons.entry_count(),
            self.guides.entry_count(),
            self.resources.entry_count(),
        )
    }
}

/// Presence of one catalog entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntryStatus {
    pub title: &'static str,
    pub file: &'static str,
    pub present: bool,
}

impl EntryStatus {
    fn resolve(entry: &CatalogEntry, snapshot: &DirectorySnapshot) -> Self {
        EntryStatus {
            title: entry.title,
            file: entry.file_name,
            present: snapshot.contains_file(entry.file_name),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PhaseReport {
    pub name: &'static str,
    pub lessons: Vec<EntryStatus>,
}

/// Everything the explorer prints, in display order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Report {
    pub stats: Stats,
    pub phases: Vec<PhaseReport>,
    pub guides: Vec<EntryStatus>,
    pub resources: Vec<EntryStatus>,
}

impl Report {
    /// Pair every catalog entry with its presence in `snapshot`.
    pub fn build(catalog: &Catalog, snapshot: &TreeSnapshot) -> Self {
        let phases = catalog
            .phases
            .iter()
            .map(|phase| PhaseReport {
                name: phase.name,
                lessons: phase
                    .entries
                    .iter()
                    .map(|entry| EntryStatus::resolve(entry, &snapshot.lessons))
                    .collect(),
            })
            .collect();

        Report {
            stats: snapshot.stats(),
            phases,
            guides: catalog
                .guides
                .iter()
                .map(|entry| EntryStatus::resolve(entry, &snapshot.guides))
                .collect(),
            resources: catalog
                .resources
                .iter()
                .map(|entry| EntryStatus::resolve(entry, &snapshot.resources))
                .collect(),
        }
    }

    /// Catalog entries whose backing file is absent, tagged by category.
    pub fn missing(&self) -> impl Iterator<Item = (CategoryKind, &EntryStatus)> {
        let lessons = self
            .phases
            .iter()
            .flat_map(|phase| phase.lessons.iter())
            .map(|status| (CategoryKind::Lessons, status));
        let guides = self
            .guides
            .iter()
            .map(|status| (CategoryKind::Guides, status));
        let resources = self
            .resources
            .iter()
            .map(|status| (CategoryKind::Resources, status));
        lessons
            .chain(guides)
            .chain(resources)
            .filter(|(_, status)| !status.present)
    }
}
