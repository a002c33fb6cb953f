//! Project type detection.
//!
//! A root-level `package.json` makes a repository a Node.js project; anything
//! else is published as static content. Detection never fails: manifest
//! problems are reported as warnings and the node workflow is still chosen.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::manifest::{MANIFEST_FILE, PackageManifest};
use crate::types::ProjectType;

pub const DEFAULT_PUBLISH_DIR: &str = "./dist";

/// What the manifest says about `npm run build`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum BuildScript {
    Found(String),
    Missing,
    Unreadable(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub project_type: ProjectType,
    pub manifest_path: Option<PathBuf>,
    pub build_script: Option<BuildScript>,
    /// Build output directory guessed from the manifest's dependencies.
    pub publish_dir: Option<String>,
    pub warnings: Vec<String>,
}

impl Detection {
    fn static_site() -> Self {
        Self {
            project_type: ProjectType::Static,
            manifest_path: None,
            build_script: None,
            publish_dir: None,
            warnings: Vec::new(),
        }
    }
}

/// Classify the repository at `root`.
pub fn detect_project(root: &Path) -> Detection {
    let manifest_path = root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        tracing::debug!(root = %root.display(), "no package.json, static site");
        return Detection::static_site();
    }

    inspect_node_project(manifest_path)
}

/// Classify `root` as `project_type` without looking at what it contains,
/// still reading the manifest when forcing a Node.js project.
pub fn detect_as(root: &Path, project_type: ProjectType) -> Detection {
    match project_type {
        ProjectType::Static => Detection::static_site(),
        ProjectType::Node => {
            let manifest_path = root.join(MANIFEST_FILE);
            if manifest_path.is_file() {
                return inspect_node_project(manifest_path);
            }
            Detection {
                project_type: ProjectType::Node,
                manifest_path: None,
                build_script: None,
                publish_dir: Some(DEFAULT_PUBLISH_DIR.to_string()),
                warnings: vec![
                    "No package.json at the repository root. 'npm ci' will fail.".to_string(),
                ],
            }
        }
    }
}

/// Read the manifest of a repository known to be a Node.js project.
pub fn inspect_node_project(manifest_path: PathBuf) -> Detection {
    let mut warnings = Vec::new();

    let (build_script, publish_dir) = match PackageManifest::load(&manifest_path) {
        Ok(manifest) => {
            let build = match manifest.build_script() {
                Some(cmd) => BuildScript::Found(cmd.to_string()),
                None => {
                    warnings.push(
                        "No 'build' script found in package.json. The workflow might fail."
                            .to_string(),
                    );
                    BuildScript::Missing
                }
            };
            (build, infer_publish_dir(&manifest))
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read package.json");
            warnings.push(format!("Could not read package.json: {err}"));
            (
                BuildScript::Unreadable(err.to_string()),
                DEFAULT_PUBLISH_DIR.to_string(),
            )
        }
    };

    tracing::debug!(?build_script, %publish_dir, "node project");

    Detection {
        project_type: ProjectType::Node,
        manifest_path: Some(manifest_path),
        build_script: Some(build_script),
        publish_dir: Some(publish_dir),
        warnings,
    }
}

/// Guess the build output directory from well-known toolchains.
///
/// Create React App builds into `./build`, a Next.js static export into
/// `./out`; Vite, Svelte and everything else default to `./dist`.
pub fn infer_publish_dir(manifest: &PackageManifest) -> String {
    let dir = if manifest.has_dependency("react-scripts") {
        "./build"
    } else if manifest.has_dependency("next") {
        "./out"
    } else {
        DEFAULT_PUBLISH_DIR
    };
    dir.to_string()
}
