//! Detect command: scan and classify without writing anything.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::SetupError;
use crate::config::SetupConfig;
use crate::context::AppContext;
use crate::detect::{Detection, detect_as, detect_project};
use crate::fs::find_index_html;
use crate::types::ProjectType;

#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    /// Skip type detection and use this type instead.
    pub project_type: Option<ProjectType>,
}

impl DetectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DetectReport {
    pub root: PathBuf,
    pub index_html: PathBuf,
    pub detection: Detection,
}

pub struct DetectCommand {
    ctx: AppContext,
}

impl DetectCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn with_defaults(root: Option<PathBuf>) -> anyhow::Result<Self> {
        Ok(Self::new(AppContext::with_defaults(root)?))
    }

    pub fn execute(&self, options: &DetectOptions) -> Result<DetectReport, SetupError> {
        let config = self.ctx.load_config()?;
        inspect(self.ctx.project_root(), &config, options)
    }
}

/// Locate `index.html` and classify the repository.
pub(crate) fn inspect(
    root: &Path,
    config: &SetupConfig,
    options: &DetectOptions,
) -> Result<DetectReport, SetupError> {
    if !root.is_dir() {
        return Err(SetupError::RootNotFound {
            root: root.to_path_buf(),
        });
    }

    tracing::debug!(root = %root.display(), "scanning repository");
    let index_html =
        find_index_html(root, &config.ignore())?.ok_or_else(|| SetupError::IndexNotFound {
            root: root.to_path_buf(),
        })?;

    let detection = match options.project_type {
        Some(project_type) => detect_as(root, project_type),
        None => detect_project(root),
    };

    Ok(DetectReport {
        root: root.to_path_buf(),
        index_html,
        detection,
    })
}
