//! The fixed table of contents for the full-stack guide.
//!
//! Every lesson, guide and resource the explorer knows about is declared here
//! as `'static` data. Declaration order is display order; nothing in the
//! workspace mutates or reorders these tables.

use std::fmt;

/// One displayable item backed by a single markdown file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub file_name: &'static str,
}

impl CatalogEntry {
    pub const fn new(title: &'static str, file_name: &'static str) -> Self {
        CatalogEntry { title, file_name }
    }
}

/// Ordered group of lessons.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Phase {
    pub name: &'static str,
    pub entries: &'static [CatalogEntry],
}

/// The three on-disk groupings of documentation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CategoryKind {
    Lessons,
    Guides,
    Resources,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 3] = [
        CategoryKind::Lessons,
        CategoryKind::Guides,
        CategoryKind::Resources,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Lessons => "lessons",
            CategoryKind::Guides => "guides",
            CategoryKind::Resources => "resources",
        }
    }

    /// Directory name used when configuration does not override it.
    pub fn default_dir_name(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete catalog: lesson phases plus the flat guide and resource lists.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    pub phases: &'static [Phase],
    pub guides: &'static [CatalogEntry],
    pub resources: &'static [CatalogEntry],
}

impl Catalog {
    /// The catalog that ships with the guide.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Entries of one category in declaration order. Lessons are flattened
    /// across phases.
    pub fn entries(&self, kind: CategoryKind) -> Vec<&'static CatalogEntry> {
        match kind {
            CategoryKind::Lessons => self
                .phases
                .iter()
                .flat_map(|phase| phase.entries.iter())
                .collect(),
            CategoryKind::Guides => self.guides.iter().collect(),
            CategoryKind::Resources => self.resources.iter().collect(),
        }
    }

    pub fn lesson_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.entries.len()).sum()
    }
}

static BUILTIN: Catalog = Catalog {
    phases: PHASES,
    guides: GUIDES,
    resources: RESOURCES,
};

const PHASES: &[Phase] = &[
    Phase {
        name: "Phase 1: Foundations 🏗️",
        entries: &[
            CatalogEntry::new("Lesson 0: Computer Basics", "Lesson 00_ Computer Basics.md"),
            CatalogEntry::new(
                "Lesson 0.5: Internet Concepts",
                "Lesson 00.5_ Internet Concepts.md",
            ),
            CatalogEntry::new(
                "Lesson 0.75: Git and GitHub",
                "Lesson 00.75_ Git and GitHub.md",
            ),
            CatalogEntry::new(
                "Lesson 1: Introduction to Web Development",
                "Lesson 01_ Introduction to Web Development.md",
            ),
            CatalogEntry::new("Lesson 2: HTML Basics", "Lesson 02_ HTML Basics.md"),
            CatalogEntry::new("Lesson 3: CSS Basics", "Lesson 03_ CSS Basics.md"),
            CatalogEntry::new(
                "Lesson 4: JavaScript Basics",
                "Lesson 04_ JavaScript Basics.md",
            ),
        ],
    },
    Phase {
        name: "Phase 2: Backend Development ⚙️",
        entries: &[
            CatalogEntry::new(
                "Lesson 5: Backend Development and Node.js",
                "Lesson 05_ Backend Development and Node.js.md",
            ),
            CatalogEntry::new("Lesson 6: Express.js", "Lesson 06_ Express.js.md"),
            CatalogEntry::new(
                "Lesson 7: Databases and MongoDB",
                "Lesson 07_ Databases and MongoDB.md",
            ),
            CatalogEntry::new("Lesson 8: Mongoose", "Lesson 08_ Mongoose.md"),
        ],
    },
    Phase {
        name: "Phase 3: Frontend Frameworks ⚛️",
        entries: &[
            CatalogEntry::new("Lesson 9: React Basics", "Lesson 09_ React Basics.md"),
            CatalogEntry::new("Lesson 10: React Hooks", "Lesson 10_ React Hooks.md"),
            CatalogEntry::new("Lesson 11: React Router", "Lesson 11_ React Router.md"),
            CatalogEntry::new("Lesson 12: Redux", "Lesson 12_ Redux.md"),
        ],
    },
    Phase {
        name: "Phase 4: Advanced Topics 🚀",
        entries: &[
            CatalogEntry::new(
                "Lesson 13: Authentication & Authorization",
                "Lesson 13_ Authentication & Authorization.md",
            ),
            CatalogEntry::new(
                "Lesson 14: Testing - Unit, Integration & E2E",
                "Lesson 14_ Testing - Unit, Integration & E2E.md",
            ),
            CatalogEntry::new(
                "Lesson 15: Deployment & DevOps",
                "Lesson 15_ Deployment & DevOps.md",
            ),
            CatalogEntry::new(
                "Lesson 16: Full-Stack Development Roadmap & Best Practices",
                "Lesson 16_ Full-Stack Development Roadmap & Best Practices.md",
            ),
        ],
    },
    Phase {
        name: "Phase 5: Specialized Topics 🎯",
        entries: &[
            CatalogEntry::new(
                "Lesson 17: API Design and GraphQL",
                "Lesson 17_ API Design and GraphQL.md",
            ),
            CatalogEntry::new(
                "Lesson 18: Real-Time Applications with WebSockets",
                "Lesson 18_ Real-Time Applications with WebSockets.md",
            ),
        ],
    },
];

const GUIDES: &[CatalogEntry] = &[
    CatalogEntry::new("Advanced JavaScript Guide", "Advanced_JavaScript_Guide.md"),
    CatalogEntry::new("Advanced React Guide", "Advanced_React_Guide.md"),
    CatalogEntry::new("Advanced Topics Guide", "Advanced_Topics_Guide.md"),
    CatalogEntry::new(
        "API Calling & HTTP Methods Guide",
        "API_Calling_HTTP_Methods_Guide.md",
    ),
    CatalogEntry::new("Backend Technologies", "Backend_Technologies.md"),
    CatalogEntry::new("Database Technologies", "Database_Technologies.md"),
    CatalogEntry::new("DevOps Deployment", "DevOps_Deployment.md"),
    CatalogEntry::new("Frontend Technologies", "Frontend_Technologies.md"),
    CatalogEntry::new("Postman API Testing Guide", "Postman_API_Testing_Guide.md"),
    CatalogEntry::new(
        "Programming Languages Guide",
        "Programming_Languages_Guide.md",
    ),
    CatalogEntry::new("Tools & Frameworks", "Tools_Frameworks.md"),
    CatalogEntry::new(
        "Website Libraries & Framework Guide",
        "Website_Libraries_Framework_Guide.md",
    ),
];

const RESOURCES: &[CatalogEntry] = &[
    CatalogEntry::new("Career Best Practices", "Career_Best_Practices.md"),
    CatalogEntry::new(
        "Code Examples & Practical Implementations",
        "Code_Examples_Practical_Implementations.md",
    ),
    CatalogEntry::new(
        "Learning Paths & Skill Trees",
        "Learning_Paths_Skill_Trees.md",
    ),
];
