//! Configuration primitives and loader for guide-explorer.
//!
//! A plain run uses the built-in defaults and reads no file. `--config FILE`
//! layers one TOML file over them, and `--root DIR` wins over whatever root
//! the file names. Each file value remembers where it came from so validation
//! failures can point at the offending file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use guide_explorer_catalog::CategoryKind;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Complete configuration resolved from defaults and command-line overrides.
#[derive(Clone, Debug)]
pub struct Config {
    pub project: ProjectSettings,
    pub directories: DirectorySettings,
    pub display: DisplaySettings,
}

impl Config {
    /// Built-in defaults rooted at `root`, without consulting the filesystem.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config {
            project: ProjectSettings { root: root.into() },
            directories: DirectorySettings::default(),
            display: DisplaySettings::default(),
        }
    }

    /// Absolute base directory for one catalog category.
    pub fn category_dir(&self, kind: CategoryKind) -> PathBuf {
        let dir = self.directories.for_kind(kind);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.project.root.join(dir)
        }
    }
}

/// Where the documentation tree lives.
#[derive(Clone, Debug)]
pub struct ProjectSettings {
    pub root: PathBuf,
}

/// Per-category base directories, relative to the project root unless absolute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectorySettings {
    pub lessons: PathBuf,
    pub guides: PathBuf,
    pub resources: PathBuf,
}

impl DirectorySettings {
    pub fn for_kind(&self, kind: CategoryKind) -> &Path {
        match kind {
            CategoryKind::Lessons => &self.lessons,
            CategoryKind::Guides => &self.guides,
            CategoryKind::Resources => &self.resources,
        }
    }
}

impl Default for DirectorySettings {
    fn default() -> Self {
        DirectorySettings {
            lessons: PathBuf::from(CategoryKind::Lessons.default_dir_name()),
            guides: PathBuf::from(CategoryKind::Guides.default_dir_name()),
            resources: PathBuf::from(CategoryKind::Resources.default_dir_name()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DisplaySettings {
    pub color: ColorChoice,
}

/// When to emit ANSI styling.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!("unknown color choice '{other}'")),
        }
    }
}

/// Where a configuration value came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigSource {
    /// Built-in values, anchored at the working directory.
    Defaults { working_dir: PathBuf },
    /// A file named with `--config`.
    File { path: PathBuf },
}

impl ConfigSource {
    /// Directory that relative paths declared by this source are joined to.
    fn base_dir(&self) -> &Path {
        match self {
            ConfigSource::Defaults { working_dir } => working_dir,
            ConfigSource::File { path } => path.parent().unwrap_or_else(|| Path::new(".")),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults { .. } => f.write_str("built-in defaults"),
            ConfigSource::File { path } => write!(f, "config file {}", path.display()),
        }
    }
}

/// What the command line asked for. Nothing is read from disk unless
/// `config_path` is set.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Documentation root that wins over `[project] root`.
    pub fn with_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve working directory {attempted}: {source}")]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
    #[error("config file {path} not found")]
    NotFound { path: PathBuf },
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("configuration validation failed:\n{0}")]
    Validation(ConfigValidationErrors),
}

impl Config {
    /// Resolves built-in defaults, then the `--config` file if one was
    /// given, then the `--root` flag.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = canonical_working_dir(options.working_dir)?;
        let mut merged = PartialConfig::defaults(&working_dir);

        if let Some(path) = options.config_path {
            let path = anchor(&working_dir, path);
            merged.merge(read_config_file(&path)?);
            debug!(path = %path.display(), "applied configuration file");
        }

        let mut config = merged.finalize().map_err(ConfigError::Validation)?;
        if let Some(root) = options.root {
            config.project.root = anchor(&working_dir, root);
            debug!(root = %config.project.root.display(), "root taken from the command line");
        }
        Ok(config)
    }
}

fn canonical_working_dir(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let attempted = explicit.unwrap_or_else(|| PathBuf::from("."));
    fs::canonicalize(&attempted)
        .map_err(|source| ConfigError::WorkingDirectory { attempted, source })
}

fn anchor(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

fn read_config_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound { path: path.into() })
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.into(),
                source,
            })
        }
    };
    let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.into(),
        source,
    })?;
    Ok(raw.into_partial(ConfigSource::File { path: path.into() }))
}

#[derive(Clone, Debug)]
struct Located<T> {
    value: T,
    source: ConfigSource,
}

impl<T> Located<T> {
    fn new(value: T, source: ConfigSource) -> Self {
        Located { value, source }
    }
}

#[derive(Clone, Debug, Default)]
struct PartialConfig {
    root: Option<Located<PathBuf>>,
    lessons: Option<Located<PathBuf>>,
    guides: Option<Located<PathBuf>>,
    resources: Option<Located<PathBuf>>,
    color: Option<Located<String>>,
}

impl PartialConfig {
    fn defaults(working_dir: &Path) -> Self {
        let source = ConfigSource::Defaults {
            working_dir: working_dir.to_path_buf(),
        };
        let dirs = DirectorySettings::default();
        PartialConfig {
            root: Some(Located::new(working_dir.to_path_buf(), source.clone())),
            lessons: Some(Located::new(dirs.lessons, source.clone())),
            guides: Some(Located::new(dirs.guides, source.clone())),
            resources: Some(Located::new(dirs.resources, source.clone())),
            color: Some(Located::new(ColorChoice::default().as_str().to_owned(), source)),
        }
    }

    /// Fields set in `other` replace ours.
    fn merge(&mut self, other: PartialConfig) {
        self.root = other.root.or(self.root.take());
        self.lessons = other.lessons.or(self.lessons.take());
        self.guides = other.guides.or(self.guides.take());
        self.resources = other.resources.or(self.resources.take());
        self.color = other.color.or(self.color.take());
    }

    fn finalize(self) -> Result<Config, ConfigValidationErrors> {
        let mut errors = Vec::new();

        let root = self
            .root
            .map(|root| anchor(root.source.base_dir(), root.value))
            .unwrap_or_else(|| PathBuf::from("."));

        let defaults = DirectorySettings::default();
        let lessons = finalize_dir(self.lessons, "directories.lessons", &mut errors)
            .unwrap_or(defaults.lessons);
        let guides = finalize_dir(self.guides, "directories.guides", &mut errors)
            .unwrap_or(defaults.guides);
        let resources = finalize_dir(self.resources, "directories.resources", &mut errors)
            .unwrap_or(defaults.resources);

        let color = match self.color {
            None => ColorChoice::Auto,
            Some(located) => located.value.parse::<ColorChoice>().unwrap_or_else(|message| {
                errors.push(ConfigValidationError {
                    source: located.source,
                    message,
                    context: "display.color",
                });
                ColorChoice::Auto
            }),
        };

        if !errors.is_empty() {
            return Err(ConfigValidationErrors(errors));
        }

        Ok(Config {
            project: ProjectSettings { root },
            directories: DirectorySettings {
                lessons,
                guides,
                resources,
            },
            display: DisplaySettings { color },
        })
    }
}

/// Directory values stay relative to the project root; only emptiness is
/// rejected here.
fn finalize_dir(
    located: Option<Located<PathBuf>>,
    context: &'static str,
    errors: &mut Vec<ConfigValidationError>,
) -> Option<PathBuf> {
    let located = located?;
    if located.value.as_os_str().is_empty() {
        errors.push(ConfigValidationError {
            source: located.source,
            message: "directory cannot be empty".into(),
            context,
        });
        return None;
    }
    Some(located.value)
}

/// Every validation failure found in one load, printed one per line.
#[derive(Debug)]
pub struct ConfigValidationErrors(pub Vec<ConfigValidationError>);

impl fmt::Display for ConfigValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "- {err}")?;
        }
        Ok(())
    }
}

/// A rejected value, the key it was set under and the source that set it.
#[derive(Clone, Debug)]
pub struct ConfigValidationError {
    pub source: ConfigSource,
    pub message: String,
    pub context: &'static str,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.context, self.message, self.source)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    project: Option<RawProject>,
    #[serde(default)]
    directories: Option<RawDirectories>,
    #[serde(default)]
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProject {
    #[serde(default)]
    root: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDirectories {
    #[serde(default)]
    lessons: Option<PathBuf>,
    #[serde(default)]
    guides: Option<PathBuf>,
    #[serde(default)]
    resources: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDisplay {
    #[serde(default)]
    color: Option<String>,
}

impl RawConfig {
    fn into_partial(self, source: ConfigSource) -> PartialConfig {
        let locate = |value: PathBuf| Located::new(value, source.clone());
        let mut partial = PartialConfig::default();
        if let Some(project) = self.project {
            partial.root = project.root.map(locate);
        }
        if let Some(directories) = self.directories {
            partial.lessons = directories.lessons.map(locate);
            partial.guides = directories.guides.map(locate);
            partial.resources = directories.resources.map(locate);
        }
        if let Some(display) = self.display {
            partial.color = display
                .color
                .map(|value| Located::new(value, source.clone()));
        }
        partial
    }
}
