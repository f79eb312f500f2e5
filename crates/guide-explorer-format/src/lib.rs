//! Output formatters for guide-explorer.
//!
//! [`render`] turns a [`Report`] into an ordered list of [`Line`]s without
//! touching stdout; [`paint`] and [`to_json`] turn that into bytes.

use colored::Colorize;
use guide_explorer_ops::{EntryStatus, Report};

pub const PRESENT_GLYPH: &str = "✅";
pub const MISSING_GLYPH: &str = "❌";

const TITLE: &str = "🚀 Ultimate Full-Stack Web Development Guide";
const RULE: &str = "===============================================";

const TIPS: [&str; 4] = [
    "• Start with Lesson 0 if you're new to programming",
    "• Each lesson includes practical assignments and projects",
    "• Use the specialized guides for deep dives into specific topics",
    "• Check resources for career guidance and additional examples",
];

const NEXT_STEPS: [&str; 4] = [
    "1. Choose your starting point based on your experience level",
    "2. Follow the learning path sequentially for best results",
    "3. Practice with the code examples and assignments",
    "4. Join our community for support and questions",
];

/// Output flavour selected on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

/// ANSI color attached to a line when styling is enabled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tone {
    Cyan,
    Yellow,
    Green,
    Magenta,
}

/// One output line. `tone` is advisory; plain output ignores it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub text: String,
    pub tone: Option<Tone>,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            tone: None,
        }
    }

    fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Line {
            text: text.into(),
            tone: Some(tone),
        }
    }

    fn blank() -> Self {
        Line::plain("")
    }
}

/// Full explorer output: header, stats, menu, closing line.
pub fn render(report: &Report) -> Vec<Line> {
    let mut lines = header();
    lines.extend(stats_block(report));
    lines.extend(menu(report));
    lines.extend(closing());
    lines
}

pub fn header() -> Vec<Line> {
    vec![
        Line::toned(TITLE, Tone::Cyan),
        Line::toned(RULE, Tone::Yellow),
        Line::blank(),
    ]
}

pub fn stats_block(report: &Report) -> Vec<Line> {
    let stats = &report.stats;
    vec![
        Line::toned("📊 Repository Statistics:", Tone::Green),
        Line::plain(format!("Total Lessons: {}", stats.total_lessons)),
        Line::plain(format!("Total Guides: {}", stats.total_guides)),
        Line::plain(format!("Total Resources: {}", stats.total_resources)),
        Line::plain(format!("Total Files: {}", stats.total_files)),
        Line::plain(format!(
            "Estimated Learning Time: {} hours",
            stats.estimated_hours
        )),
        Line::blank(),
    ]
}

/// Learning path, guides, resources, tips and next steps.
pub fn menu(report: &Report) -> Vec<Line> {
    let mut lines = vec![Line::toned("📚 Learning Path:", Tone::Green), Line::blank()];

    for (idx, phase) in report.phases.iter().enumerate() {
        lines.push(Line::toned(
            format!("{}. {}", idx + 1, phase.name),
            Tone::Yellow,
        ));
        lines.extend(phase.lessons.iter().map(status_line));
        lines.push(Line::blank());
    }

    lines.push(Line::toned("📖 Specialized Guides:", Tone::Green));
    lines.push(Line::blank());
    lines.extend(report.guides.iter().map(status_line));

    lines.push(Line::blank());
    lines.push(Line::toned("📚 Resources:", Tone::Green));
    lines.push(Line::blank());
    lines.extend(report.resources.iter().map(status_line));

    lines.push(Line::blank());
    lines.push(Line::toned("💡 Tips:", Tone::Magenta));
    lines.extend(TIPS.iter().copied().map(Line::plain));
    lines.push(Line::blank());
    lines.push(Line::toned("🎯 Next Steps:", Tone::Cyan));
    lines.extend(NEXT_STEPS.iter().copied().map(Line::plain));
    lines.push(Line::blank());
    lines
}

pub fn closing() -> Vec<Line> {
    vec![Line::toned("Happy learning! 🚀", Tone::Green), Line::blank()]
}

fn status_line(status: &EntryStatus) -> Line {
    let glyph = if status.present {
        PRESENT_GLYPH
    } else {
        MISSING_GLYPH
    };
    Line::plain(format!("   {} {}", glyph, status.title))
}

/// Join lines into newline-terminated text, styling toned lines when `color`
/// is set.
pub fn paint(lines: &[Line], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        match (color, line.tone) {
            (true, Some(tone)) => {
                let styled = match tone {
                    Tone::Cyan => line.text.as_str().cyan(),
                    Tone::Yellow => line.text.as_str().yellow(),
                    Tone::Green => line.text.as_str().green(),
                    Tone::Magenta => line.text.as_str().magenta(),
                };
                out.push_str(&styled.to_string());
            }
            _ => out.push_str(&line.text),
        }
        out.push('\n');
    }
    out
}

pub fn to_json(report: &Report) -> serde_json::Result<String> {
    let mut rendered = serde_json::to_string_pretty(report)?;
    rendered.push('\n');
    Ok(rendered)
}
