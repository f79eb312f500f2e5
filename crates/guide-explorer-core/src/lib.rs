//! Core orchestration layer for guide-explorer.

use guide_explorer_config::Config;
use guide_explorer_format::{paint, render, to_json, ReportFormat};
use guide_explorer_ops::{OperationError, Operations};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Entry point for higher-level consumers (the CLI, tests).
pub struct GuideExplorer {
    ops: Operations,
}

impl GuideExplorer {
    /// Bootstrap the explorer from configuration.
    pub fn bootstrap(config: Config) -> Self {
        Self {
            ops: Operations::new(config),
        }
    }

    /// Scan the tree once and produce the complete output text.
    ///
    /// Statistics need every base directory, so a missing one fails here
    /// before any text exists.
    pub fn render(&self, format: ReportFormat, color: bool) -> Result<String, ExplorerError> {
        let report = self.ops.report()?;
        match format {
            ReportFormat::Plain => Ok(paint(&render(&report), color)),
            ReportFormat::Json => Ok(to_json(&report)?),
        }
    }
}
