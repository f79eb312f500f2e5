use std::fs;

use guide_explorer_catalog::{Catalog, CatalogEntry, CategoryKind, Phase};
use guide_explorer_ops::{
    check_existence, DirectorySnapshot, OperationError, Operations, Report, Stats, TreeSnapshot,
};
use guide_explorer_test_support::DocsTree;
use pretty_assertions::assert_eq;

fn glyphs(report: &Report) -> Vec<bool> {
    report
        .phases
        .iter()
        .flat_map(|phase| phase.lessons.iter().map(|status| status.present))
        .collect()
}

#[test]
fn existence_requires_the_exact_name() {
    let tree = DocsTree::new();
    tree.touch(CategoryKind::Guides, "Advanced_React_Guide.md");
    let dir = tree.dir(CategoryKind::Guides);

    assert!(check_existence(&dir, "Advanced_React_Guide.md"));
    assert!(!check_existence(&dir, "advanced_react_guide.md"));
    assert!(!check_existence(&dir, "Advanced_React"));
    assert!(!check_existence(&dir, "Advanced_React_Guide.md.bak"));
    assert!(!check_existence(&dir, ""));
}

#[test]
fn existence_ignores_directories_and_nested_files() {
    let tree = DocsTree::new();
    fs::create_dir(tree.dir(CategoryKind::Lessons).join("Lesson 08_ Mongoose.md"))
        .expect("create directory");
    tree.touch(CategoryKind::Lessons, "archive/Lesson 06_ Express.js.md");

    let ops = Operations::new(tree.config());
    assert!(!ops.check_existence(CategoryKind::Lessons, "Lesson 08_ Mongoose.md"));
    assert!(!ops.check_existence(CategoryKind::Lessons, "Lesson 06_ Express.js.md"));
    assert!(!ops.check_existence(CategoryKind::Lessons, "archive/Lesson 06_ Express.js.md"));
}

#[test]
fn existence_in_missing_directory_is_false_not_error() {
    let tree = DocsTree::bare();
    let ops = Operations::new(tree.config());
    assert!(!ops.check_existence(CategoryKind::Resources, "Career_Best_Practices.md"));
}

#[test]
fn stats_count_directory_entries_not_catalog_matches() {
    let tree = DocsTree::new();
    tree.touch(CategoryKind::Lessons, "Lesson 00_ Computer Basics.md")
        .touch(CategoryKind::Lessons, "scratch notes.txt")
        .touch(CategoryKind::Guides, "Unlisted_Guide.md")
        .touch(CategoryKind::Resources, "Career_Best_Practices.md");
    fs::create_dir(tree.dir(CategoryKind::Resources).join("images")).expect("create images");

    let stats = Operations::new(tree.config())
        .compute_stats()
        .expect("compute stats");

    assert_eq!(stats, Stats::from_counts(2, 1, 2));
    assert_eq!(stats.total_files, 7);
    assert_eq!(stats.estimated_hours, 2 * 6 + 3 + 2 * 2);
}

#[test]
fn phase_one_only_marks_remaining_lessons_missing() {
    let catalog = Catalog::builtin();
    let tree = DocsTree::new();
    tree.touch_entries(CategoryKind::Lessons, catalog.phases[0].entries);

    let report = Operations::new(tree.config()).report().expect("report");

    let mut expected = vec![true; 7];
    expected.extend(vec![false; catalog.lesson_count() - 7]);
    assert_eq!(glyphs(&report), expected);
    assert_eq!(report.stats.total_lessons, 7);

    let titles: Vec<_> = report
        .phases
        .iter()
        .flat_map(|phase| phase.lessons.iter().map(|status| status.title))
        .collect();
    let declared: Vec<_> = catalog
        .entries(CategoryKind::Lessons)
        .iter()
        .map(|entry| entry.title)
        .collect();
    assert_eq!(titles, declared);
}

#[test]
fn empty_guides_directory_reports_every_guide_missing() {
    let tree = DocsTree::new();
    tree.populate(Catalog::builtin());
    for entry in Catalog::builtin().guides {
        fs::remove_file(tree.dir(CategoryKind::Guides).join(entry.file_name))
            .expect("remove guide");
    }

    let report = Operations::new(tree.config()).report().expect("report");

    assert_eq!(report.stats.total_guides, 0);
    assert!(report.guides.iter().all(|status| !status.present));
    assert!(report.resources.iter().all(|status| status.present));
    assert_eq!(
        report
            .missing()
            .filter(|(kind, _)| *kind == CategoryKind::Guides)
            .count(),
        12
    );
}

#[test]
fn missing_lessons_directory_is_fatal() {
    let tree = DocsTree::new();
    tree.remove_dir(CategoryKind::Lessons);

    let err = Operations::new(tree.config())
        .report()
        .expect_err("lessons directory is absent");

    match err {
        OperationError::Io { kind, path, .. } => {
            assert_eq!(kind, CategoryKind::Lessons);
            assert_eq!(path, tree.dir(CategoryKind::Lessons));
        }
    }
}

#[test]
fn missing_resources_directory_is_fatal_for_stats() {
    let tree = DocsTree::new();
    tree.remove_dir(CategoryKind::Resources);

    let err = Operations::new(tree.config())
        .compute_stats()
        .expect_err("resources directory is absent");
    assert!(err.to_string().contains("failed to list resources directory"));
}

#[test]
fn report_is_pure_over_a_snapshot() {
    const ENTRIES: &[CatalogEntry] = &[
        CatalogEntry::new("Intro", "intro.md"),
        CatalogEntry::new("Outro", "outro.md"),
    ];
    const PHASES: &[Phase] = &[Phase {
        name: "Only phase",
        entries: ENTRIES,
    }];
    static CATALOG: Catalog = Catalog {
        phases: PHASES,
        guides: &[],
        resources: &[],
    };

    let snapshot = TreeSnapshot {
        lessons: DirectorySnapshot::from_listing(5, ["intro.md", "other.md"]),
        guides: DirectorySnapshot::from_listing(0, Vec::<String>::new()),
        resources: DirectorySnapshot::from_listing(1, ["x.md"]),
    };

    let first = Report::build(&CATALOG, &snapshot);
    let second = Report::build(&CATALOG, &snapshot);
    assert_eq!(first, second);
    assert_eq!(glyphs(&first), vec![true, false]);
    assert_eq!(first.stats, Stats::from_counts(5, 0, 1));
}
