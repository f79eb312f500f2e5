use guide_explorer_catalog::{Catalog, CategoryKind};
use guide_explorer_core::{ExplorerError, GuideExplorer};
use guide_explorer_format::{ReportFormat, MISSING_GLYPH, PRESENT_GLYPH};
use guide_explorer_test_support::DocsTree;
use pretty_assertions::assert_eq;

fn plain(tree: &DocsTree) -> String {
    GuideExplorer::bootstrap(tree.config())
        .render(ReportFormat::Plain, false)
        .expect("render")
}

#[test]
fn complete_tree_shows_every_entry_present() {
    let tree = DocsTree::new();
    tree.populate(Catalog::builtin());

    let output = plain(&tree);

    assert_eq!(output.matches(PRESENT_GLYPH).count(), 21 + 12 + 3);
    assert_eq!(output.matches(MISSING_GLYPH).count(), 0);
    assert!(output.contains("Total Files: 38\n"));
    assert!(output.contains("Estimated Learning Time: 168 hours\n"));
}

#[test]
fn two_runs_over_the_same_tree_are_byte_identical() {
    let tree = DocsTree::new();
    tree.touch(CategoryKind::Lessons, "Lesson 02_ HTML Basics.md")
        .touch(CategoryKind::Guides, "Tools_Frameworks.md");

    assert_eq!(plain(&tree), plain(&tree));
}

#[test]
fn status_lines_follow_declared_phase_order() {
    let tree = DocsTree::new();
    tree.touch_entries(CategoryKind::Lessons, Catalog::builtin().phases[0].entries);

    let output = plain(&tree);
    let status_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("   "))
        .take(Catalog::builtin().lesson_count())
        .collect();

    assert_eq!(status_lines.len(), 21);
    assert!(status_lines[..7]
        .iter()
        .all(|line| line.starts_with(&format!("   {PRESENT_GLYPH} "))));
    assert!(status_lines[7..]
        .iter()
        .all(|line| line.starts_with(&format!("   {MISSING_GLYPH} "))));
    assert_eq!(status_lines[0], "   ✅ Lesson 0: Computer Basics");
    assert_eq!(status_lines[20], "   ❌ Lesson 18: Real-Time Applications with WebSockets");

    let phase_headers: Vec<&str> = output
        .lines()
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_digit()))
        .filter(|line| line.contains("Phase"))
        .collect();
    assert_eq!(
        phase_headers,
        vec![
            "1. Phase 1: Foundations 🏗️",
            "2. Phase 2: Backend Development ⚙️",
            "3. Phase 3: Frontend Frameworks ⚛️",
            "4. Phase 4: Advanced Topics 🚀",
            "5. Phase 5: Specialized Topics 🎯",
        ]
    );
}

#[test]
fn missing_base_directory_produces_no_output() {
    let tree = DocsTree::new();
    tree.remove_dir(CategoryKind::Guides);

    let err = GuideExplorer::bootstrap(tree.config())
        .render(ReportFormat::Plain, false)
        .expect_err("guides directory is absent");

    assert!(matches!(err, ExplorerError::Operation(_)));
    assert!(err.to_string().contains("failed to list guides directory"));
}

#[test]
fn json_format_reports_presence_per_entry() {
    let tree = DocsTree::new();
    tree.touch(CategoryKind::Resources, "Learning_Paths_Skill_Trees.md");

    let rendered = GuideExplorer::bootstrap(tree.config())
        .render(ReportFormat::Json, false)
        .expect("render json");
    let value: serde_json::Value = serde_json::from_str(&rendered).expect("parse json");

    assert_eq!(value["stats"]["total_resources"], 1);
    assert_eq!(value["resources"][2]["present"], true);
    assert_eq!(value["resources"][0]["present"], false);
    assert_eq!(value["phases"].as_array().map(Vec::len), Some(5));
}
