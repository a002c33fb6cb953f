//! Shared core types used across detection, templating and reporting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of site a repository builds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Built with npm before publishing (a root `package.json` exists).
    Node,
    /// Published as-is.
    Static,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Node => "node",
            ProjectType::Static => "static",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" | "nodejs" | "npm" => Ok(ProjectType::Node),
            "static" | "html" => Ok(ProjectType::Static),
            _ => anyhow::bail!("Unknown project type: '{}'. Use 'node' or 'static'", s),
        }
    }
}

/// Configuration scope levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfigScope {
    /// User-wide configuration under the platform config directory.
    Global,
    /// Per-project configuration at the repository root.
    Project,
}
