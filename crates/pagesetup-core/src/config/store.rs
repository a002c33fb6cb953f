//! Config store for loading pagesetup.toml.

use std::path::{Path, PathBuf};

use crate::types::ConfigScope;

use super::{SetupConfig, merge_configs, parser, paths::config_path_for_scope};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    scope: ConfigScope,
    config_path: PathBuf,
}

impl ConfigStore {
    pub fn from_paths(scope: ConfigScope, global_dir: &Path, project_root: &Path) -> Self {
        Self {
            scope,
            config_path: config_path_for_scope(scope, global_dir, project_root),
        }
    }

    pub fn scope(&self) -> ConfigScope {
        self.scope
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load this scope's file, or `None` when it does not exist.
    pub fn load_if_exists(&self) -> anyhow::Result<Option<SetupConfig>> {
        if !self.config_path.exists() {
            return Ok(None);
        }
        tracing::debug!(path = %self.config_path.display(), "loading config");
        parser::parse_config_file(&self.config_path).map(Some)
    }

    pub fn load(&self) -> anyhow::Result<SetupConfig> {
        Ok(self.load_if_exists()?.unwrap_or_default())
    }
}

/// Load the global and project layers and merge them.
pub fn load_merged(global_dir: &Path, project_root: &Path) -> anyhow::Result<SetupConfig> {
    let global = ConfigStore::from_paths(ConfigScope::Global, global_dir, project_root)
        .load_if_exists()?;
    let project = ConfigStore::from_paths(ConfigScope::Project, global_dir, project_root)
        .load_if_exists()?;
    Ok(merge_configs(global, project))
}
