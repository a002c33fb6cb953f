//! Setup command implementation.
//!
//! Scans for `index.html`, detects the project type, writes the matching
//! GitHub Pages workflow and ensures the `.nojekyll` marker exists.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::SetupError;
use super::detect::{DetectOptions, inspect};
use crate::context::AppContext;
use crate::detect::Detection;
use crate::fs::{MarkerOutcome, ensure_nojekyll};
use crate::git::current_branch;
use crate::types::ProjectType;
use crate::workflow::{
    WorkflowParams, WorkflowTemplate, WorkflowWrite, publish_advice, write_workflow,
};

/// Options for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Report what would change without writing
    pub dry_run: bool,
    /// Skip type detection and use this type instead
    pub project_type: Option<ProjectType>,
}

impl SetupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }
}

/// Report from a setup run
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub root: PathBuf,
    pub index_html: PathBuf,
    pub detection: Detection,
    /// `name:` of the generated workflow
    pub workflow_name: String,
    pub workflow: WorkflowWrite,
    /// `None` when the marker is disabled in config
    pub marker: Option<MarkerOutcome>,
    pub dry_run: bool,
    pub warnings: Vec<String>,
    pub advice: Vec<String>,
    pub next_steps: Vec<String>,
}

impl SetupReport {
    pub fn project_type(&self) -> ProjectType {
        self.detection.project_type
    }

    /// Workflow path relative to the repository root, for display.
    pub fn workflow_display_path(&self) -> PathBuf {
        relative_to(&self.workflow.path, &self.root)
    }
}

pub struct SetupCommand {
    ctx: AppContext,
}

impl SetupCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn with_defaults(root: Option<PathBuf>) -> anyhow::Result<Self> {
        Ok(Self::new(AppContext::with_defaults(root)?))
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn execute(&self, options: &SetupOptions) -> Result<SetupReport, SetupError> {
        let root = self.ctx.project_root();
        let config = self.ctx.load_config()?;

        let detect_options = DetectOptions {
            project_type: options.project_type,
        };
        let inspected = inspect(root, &config, &detect_options)?;
        let detection = inspected.detection;

        let template = WorkflowTemplate::for_project(detection.project_type);
        let params = WorkflowParams::from_config(&config, detection.publish_dir.as_deref());
        let content = template.render(&params);

        let workflow = write_workflow(root, &config, &content, options.dry_run)?;
        tracing::info!(
            path = %workflow.path.display(),
            outcome = ?workflow.outcome,
            project_type = %detection.project_type,
            "workflow generated"
        );

        let marker = if config.nojekyll() {
            Some(ensure_nojekyll(root, options.dry_run)?)
        } else {
            None
        };

        let mut warnings = detection.warnings.clone();
        if let Some(branch) = current_branch(root)
            && !params.branches.contains(&branch)
        {
            warnings.push(format!(
                "Current branch '{}' is not a deploy branch ({}). Pushes to it will not deploy.",
                branch,
                params.branches.join(", ")
            ));
        }

        let advice = match detection.project_type {
            ProjectType::Node => publish_advice().iter().map(|s| s.to_string()).collect(),
            ProjectType::Static => Vec::new(),
        };

        let workflow_rel = relative_to(&workflow.path, root);
        let next_steps = vec![
            format!("Review the generated file: {}", workflow_rel.display()),
            "Commit and push this file to your GitHub repository.".to_string(),
            "Go to Repository Settings -> Pages and ensure 'Source' is set to 'GitHub Actions'."
                .to_string(),
        ];

        Ok(SetupReport {
            root: root.to_path_buf(),
            index_html: inspected.index_html,
            detection,
            workflow_name: template.title().to_string(),
            workflow,
            marker,
            dry_run: options.dry_run,
            warnings,
            advice,
            next_steps,
        })
    }
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
