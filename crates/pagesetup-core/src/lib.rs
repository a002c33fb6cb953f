//! pagesetup core library
//!
//! Prepares a repository for GitHub Pages: finds the site's `index.html`,
//! decides whether the site is static or built with Node.js, writes the
//! matching GitHub Actions workflow and the `.nojekyll` marker.

pub mod commands;
pub mod config;
pub mod context;
pub mod detect;
pub mod fs;
pub mod git;
pub mod manifest;
pub mod types;
pub mod workflow;

/// Re-exports of commonly used types
pub mod prelude {
    // Commands
    pub use crate::commands::{
        DetectCommand, DetectOptions, DetectReport, SetupCommand, SetupError, SetupOptions,
        SetupReport, TemplateCommand,
    };
    pub use crate::context::AppContext;

    // Configuration
    pub use crate::config::{ConfigStore, SetupConfig};
    pub use crate::types::{ConfigScope, ProjectType};

    // Detection
    pub use crate::detect::{BuildScript, Detection};
    pub use crate::manifest::{ManifestError, PackageManifest};

    // Output files
    pub use crate::fs::MarkerOutcome;
    pub use crate::workflow::{WorkflowParams, WorkflowTemplate, WorkflowWrite, WriteOutcome};
}
