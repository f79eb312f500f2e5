use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use guide_explorer_config::{ColorChoice, Config, LoadOptions};
use guide_explorer_core::GuideExplorer;
use guide_explorer_format::ReportFormat;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing();

    let mut options = LoadOptions::default();
    if let Some(path) = cli.config {
        options = options.with_config_path(path);
    }
    if let Some(root) = cli.root {
        options = options.with_root(root);
    }
    let config = Config::load(options)?;

    let choice = cli.color.map(ColorChoice::from).unwrap_or(config.display.color);
    let color = use_color(choice);
    colored::control::set_override(color);

    let format = match cli.format.unwrap_or(FormatValue::Plain) {
        FormatValue::Plain => ReportFormat::Plain,
        FormatValue::Json => ReportFormat::Json,
    };

    debug!(root = %config.project.root.display(), %choice, color, "starting explorer");
    let explorer = GuideExplorer::bootstrap(config);
    let rendered = explorer.render(format, color)?;

    emit(&rendered)?;
    Ok(0)
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .try_init();
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
    }
}

/// Write everything in one go; a reader that hung up early is not an error.
fn emit(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match handle.write_all(content.as_bytes()) {
        Ok(()) => {}
        Err(err) if should_ignore_pipe_error(&err) => return Ok(()),
        Err(err) => return Err(err).context("Failed to write report"),
    }

    match handle.flush() {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}

#[derive(Parser)]
#[command(
    name = "guide-explorer",
    author,
    version,
    about = "Print the guide's learning path and check which files are on disk"
)]
struct Cli {
    /// Documentation root holding the lessons, guides and resources directories
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// TOML file layered over the built-in defaults; none is read otherwise
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// When to emit ANSI colors
    #[arg(long, value_enum)]
    color: Option<ColorValue>,
    /// Output format (plain or json)
    #[arg(long, value_enum)]
    format: Option<FormatValue>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorValue {
    Auto,
    Always,
    Never,
}

impl From<ColorValue> for ColorChoice {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Auto => ColorChoice::Auto,
            ColorValue::Always => ColorChoice::Always,
            ColorValue::Never => ColorChoice::Never,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatValue {
    Plain,
    Json,
}
