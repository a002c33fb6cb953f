//! Configuration schema for pagesetup.toml
//!
//! Every key is optional so that layers can be merged key by key:
//! - Global: ~/.config/pagesetup/pagesetup.toml
//! - Project: ./pagesetup.toml

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKFLOW_DIR: &str = ".github/workflows";
pub const DEFAULT_WORKFLOW_FILE: &str = "static.yml";
pub const DEFAULT_BRANCHES: [&str; 2] = ["main", "master"];
pub const DEFAULT_NODE_VERSIONS: [&str; 2] = ["18.x", "20.x"];
pub const DEFAULT_IGNORE: [&str; 2] = [".git", "node_modules"];

/// Root configuration structure for pagesetup.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SetupConfig {
    /// Directory (relative to the repository root) the workflow is written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_dir: Option<String>,

    /// Workflow file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_file: Option<String>,

    /// Branches whose pushes trigger a deployment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,

    /// Node.js versions in the build matrix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_versions: Option<Vec<String>>,

    /// Build output directory uploaded for Node.js projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_dir: Option<String>,

    /// Directory names skipped while scanning for index.html
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,

    /// Whether to create the .nojekyll marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nojekyll: Option<bool>,
}

impl SetupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workflow_dir(&self) -> &str {
        self.workflow_dir.as_deref().unwrap_or(DEFAULT_WORKFLOW_DIR)
    }

    pub fn workflow_file(&self) -> &str {
        self.workflow_file.as_deref().unwrap_or(DEFAULT_WORKFLOW_FILE)
    }

    pub fn branches(&self) -> Vec<String> {
        self.branches
            .clone()
            .unwrap_or_else(|| to_owned_list(&DEFAULT_BRANCHES))
    }

    pub fn node_versions(&self) -> Vec<String> {
        self.node_versions
            .clone()
            .unwrap_or_else(|| to_owned_list(&DEFAULT_NODE_VERSIONS))
    }

    pub fn ignore(&self) -> Vec<String> {
        self.ignore
            .clone()
            .unwrap_or_else(|| to_owned_list(&DEFAULT_IGNORE))
    }

    pub fn nojekyll(&self) -> bool {
        self.nojekyll.unwrap_or(true)
    }

    /// Validate values that would produce a broken workflow.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(branches) = &self.branches {
            if branches.is_empty() {
                anyhow::bail!("'branches' must list at least one branch");
            }
            if branches.iter().any(|b| b.trim().is_empty()) {
                anyhow::bail!("'branches' contains an empty branch name");
            }
        }
        if let Some(versions) = &self.node_versions {
            if versions.is_empty() {
                anyhow::bail!("'node_versions' must list at least one version");
            }
            if let Some(bad) = versions.iter().find(|v| !is_plain_version(v)) {
                anyhow::bail!("Invalid node version '{}'", bad);
            }
        }
        if let Some(file) = &self.workflow_file {
            if file.is_empty() || file.contains('/') || file.contains('\\') {
                anyhow::bail!("'workflow_file' must be a plain file name, got '{}'", file);
            }
        }
        if let Some(dir) = &self.workflow_dir
            && !is_contained_relative(dir)
        {
            anyhow::bail!(
                "'workflow_dir' must be a relative path inside the repository, got '{}'",
                dir
            );
        }
        for (key, value) in [
            ("workflow_dir", &self.workflow_dir),
            ("publish_dir", &self.publish_dir),
        ] {
            if let Some(value) = value
                && (value.contains('\n') || value.contains('\r'))
            {
                anyhow::bail!("'{}' contains a newline", key);
            }
        }
        Ok(())
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Relative, non-empty, and free of `..` so joining it onto the root stays
/// inside the root. Backslashes and drive prefixes are refused on every
/// platform.
fn is_contained_relative(dir: &str) -> bool {
    let path = Path::new(dir);
    !dir.trim().is_empty()
        && !dir.starts_with('/')
        && !dir.contains('\\')
        && !dir.contains(':')
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

fn is_plain_version(version: &str) -> bool {
    !version.is_empty()
        && version
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '*' | '/'))
}
