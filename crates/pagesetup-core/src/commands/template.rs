//! Template command: print a rendered workflow without touching the repository.

use std::path::PathBuf;

use crate::context::AppContext;
use crate::detect::detect_as;
use crate::types::ProjectType;
use crate::workflow::{WorkflowParams, WorkflowTemplate};

pub struct TemplateCommand {
    ctx: AppContext,
}

impl TemplateCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn with_defaults(root: Option<PathBuf>) -> anyhow::Result<Self> {
        Ok(Self::new(AppContext::with_defaults(root)?))
    }

    /// Render the template for `project_type` with the effective config.
    ///
    /// For Node.js projects the publish directory is inferred from the
    /// repository's manifest when one exists.
    pub fn render(&self, project_type: ProjectType) -> anyhow::Result<String> {
        let config = self.ctx.load_config()?;
        let publish_dir = match project_type {
            ProjectType::Node if self.ctx.project_root().is_dir() => {
                detect_as(self.ctx.project_root(), ProjectType::Node).publish_dir
            }
            _ => None,
        };
        let params = WorkflowParams::from_config(&config, publish_dir.as_deref());
        Ok(WorkflowTemplate::for_project(project_type).render(&params))
    }
}
