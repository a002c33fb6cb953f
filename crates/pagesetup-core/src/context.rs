//! Application context for unified dependency injection.

use std::path::{Path, PathBuf};

use crate::config::{self, SetupConfig, default_global_config_dir};
use crate::git::locate_root;

/// Paths shared by every command.
///
/// Frontends create this once and pass it to commands; tests build it with
/// explicit temporary paths.
#[derive(Debug, Clone)]
pub struct AppContext {
    project_root: PathBuf,
    global_config_dir: PathBuf,
}

impl AppContext {
    /// Create a new context with explicit paths.
    pub fn new(project_root: PathBuf, global_config_dir: PathBuf) -> Self {
        Self {
            project_root,
            global_config_dir,
        }
    }

    /// Create a context with system defaults.
    ///
    /// `root` is used as-is when given; otherwise the git working tree
    /// containing the current directory is used, or the current directory
    /// itself outside of git.
    pub fn with_defaults(root: Option<PathBuf>) -> anyhow::Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        let project_root = match root {
            Some(root) => root,
            None => locate_root(&std::env::current_dir()?),
        };

        Ok(Self::new(project_root, default_global_config_dir(&home_dir)))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn global_config_dir(&self) -> &Path {
        &self.global_config_dir
    }

    /// Effective configuration: global layer overlaid with the project layer.
    pub fn load_config(&self) -> anyhow::Result<SetupConfig> {
        config::load_merged(&self.global_config_dir, &self.project_root)
    }
}
