//! Configuration layer merging logic
//!
//! Global -> Project, key by key. A key set in the project file replaces the
//! global value wholesale; lists are not concatenated.

use super::schema::SetupConfig;

/// Merge the global and project layers
pub fn merge_configs(global: Option<SetupConfig>, project: Option<SetupConfig>) -> SetupConfig {
    let mut merged = global.unwrap_or_default();

    if let Some(layer) = project {
        overlay(&mut merged.workflow_dir, layer.workflow_dir);
        overlay(&mut merged.workflow_file, layer.workflow_file);
        overlay(&mut merged.branches, layer.branches);
        overlay(&mut merged.node_versions, layer.node_versions);
        overlay(&mut merged.publish_dir, layer.publish_dir);
        overlay(&mut merged.ignore, layer.ignore);
        overlay(&mut merged.nojekyll, layer.nojekyll);
    }

    merged
}

fn overlay<T>(base: &mut Option<T>, layer: Option<T>) {
    if layer.is_some() {
        *base = layer;
    }
}
