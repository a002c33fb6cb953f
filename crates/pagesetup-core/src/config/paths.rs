//! Config path resolution helpers.

use std::path::{Path, PathBuf};

use crate::types::ConfigScope;

pub const CONFIG_FILE_NAME: &str = "pagesetup.toml";

pub fn config_path_for_scope(
    scope: ConfigScope,
    global_dir: &Path,
    project_root: &Path,
) -> PathBuf {
    match scope {
        ConfigScope::Global => global_dir.join(CONFIG_FILE_NAME),
        ConfigScope::Project => project_root.join(CONFIG_FILE_NAME),
    }
}

/// Platform config directory for pagesetup, falling back to `~/.config`.
pub fn default_global_config_dir(home_dir: &Path) -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join("pagesetup"))
        .unwrap_or_else(|| home_dir.join(".config").join("pagesetup"))
}
