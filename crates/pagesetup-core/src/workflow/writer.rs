//! Writing the rendered workflow into the repository.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::config::SetupConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
    /// Dry run: nothing was written.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowWrite {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Path of the workflow file for `root` under `config`.
pub fn workflow_path(root: &Path, config: &SetupConfig) -> PathBuf {
    root.join(config.workflow_dir()).join(config.workflow_file())
}

/// Write `content` to the configured workflow path, creating directories as
/// needed. An identical existing file is left untouched.
pub fn write_workflow(
    root: &Path,
    config: &SetupConfig,
    content: &str,
    dry_run: bool,
) -> anyhow::Result<WorkflowWrite> {
    let path = workflow_path(root, config);

    let existing = if path.exists() {
        Some(
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?,
        )
    } else {
        None
    };

    if existing.as_deref() == Some(content.as_bytes()) {
        return Ok(WorkflowWrite {
            path,
            outcome: WriteOutcome::Unchanged,
        });
    }

    if dry_run {
        return Ok(WorkflowWrite {
            path,
            outcome: WriteOutcome::Skipped,
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create workflow directory: {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    let outcome = if existing.is_some() {
        WriteOutcome::Updated
    } else {
        WriteOutcome::Created
    };
    tracing::debug!(path = %path.display(), ?outcome, "wrote workflow");

    Ok(WorkflowWrite { path, outcome })
}
