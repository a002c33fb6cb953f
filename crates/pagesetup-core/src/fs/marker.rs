//! The `.nojekyll` marker.
//!
//! GitHub Pages runs Jekyll over published content unless this file exists,
//! and Jekyll drops paths starting with an underscore (`_next`, `_scss`).

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

pub const NOJEKYLL_FILE: &str = ".nojekyll";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerOutcome {
    Created,
    AlreadyPresent,
    /// Dry run: the marker would have been created.
    Skipped,
}

/// Create an empty `.nojekyll` at `root` unless one exists.
///
/// An existing marker is never touched.
pub fn ensure_nojekyll(root: &Path, dry_run: bool) -> anyhow::Result<MarkerOutcome> {
    let path = root.join(NOJEKYLL_FILE);
    if path.exists() {
        return Ok(MarkerOutcome::AlreadyPresent);
    }
    if dry_run {
        return Ok(MarkerOutcome::Skipped);
    }

    fs::write(&path, b"").with_context(|| format!("Failed to create {}", path.display()))?;
    tracing::debug!(path = %path.display(), "created marker");
    Ok(MarkerOutcome::Created)
}
