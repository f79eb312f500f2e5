use serde::Serialize;

/// README and the main guide live at the root, outside every category.
pub const TOP_LEVEL_FILES: usize = 2;

pub const HOURS_PER_LESSON: usize = 6;
pub const HOURS_PER_GUIDE: usize = 3;
pub const HOURS_PER_RESOURCE: usize = 2;

/// Repository statistics derived from raw directory entry counts.
///
/// The counts come from listing each base directory, not from matching the
/// catalog, so extra or renamed files are included.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Stats {
    pub total_lessons: usize,
    pub total_guides: usize,
    pub total_resources: usize,
    pub total_files: usize,
    pub estimated_hours: usize,
}

impl Stats {
    pub fn from_counts(lessons: usize, guides: usize, resources: usize) -> Self {
        Stats {
            total_lessons: lessons,
            total_guides: guides,
            total_resources: resources,
            total_files: lessons + guides + resources + TOP_LEVEL_FILES,
            estimated_hours: lessons * HOURS_PER_LESSON
                + guides * HOURS_PER_GUIDE
                + resources * HOURS_PER_RESOURCE,
        }
    }
}
