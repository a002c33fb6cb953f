//! Repository scan for the site entry point.
//!
//! The walk is breadth-first with entries sorted by name inside each
//! directory, so the shallowest `index.html` wins and ties resolve
//! lexicographically. A root-level file always wins.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

pub const INDEX_FILE: &str = "index.html";

/// Find the first `index.html` under `root`.
///
/// Directories whose file name appears in `ignore` are not entered.
/// Symlinked directories are never entered; a symlinked `index.html` matches
/// when its target is a regular file. Subdirectories that cannot be read are logged and
/// skipped; failing to read `root` itself is an error.
///
/// # Example
/// ```no_run
/// use pagesetup_core::fs::scan::find_index_html;
/// use std::path::Path;
///
/// let ignore = vec![".git".to_string()];
/// if let Some(index) = find_index_html(Path::new("."), &ignore)? {
///     println!("entry point: {}", index.display());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn find_index_html(root: &Path, ignore: &[String]) -> anyhow::Result<Option<PathBuf>> {
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let entries = match read_sorted(&dir) {
            Ok(entries) => entries,
            Err(err) if dir == root => return Err(err),
            Err(err) => {
                tracing::warn!(
                    dir = %dir.display(),
                    error = %format!("{err:#}"),
                    "skipping unreadable directory"
                );
                continue;
            }
        };

        let mut subdirs = Vec::new();
        for entry in entries {
            let name = entry.file_name();
            let ty = match entry.file_type() {
                Ok(ty) => ty,
                Err(err) => {
                    tracing::warn!(path = %entry.path().display(), error = %err, "cannot stat entry");
                    continue;
                }
            };

            // A symlinked index.html counts when it resolves to a regular file.
            if name == INDEX_FILE && (ty.is_file() || (ty.is_symlink() && entry.path().is_file()))
            {
                let found = entry.path();
                tracing::debug!(path = %found.display(), "found index.html");
                return Ok(Some(found));
            }

            if ty.is_dir() {
                let name = name.to_string_lossy();
                if ignore.iter().any(|skip| skip.as_str() == &*name) {
                    tracing::debug!(dir = %entry.path().display(), "ignored directory");
                    continue;
                }
                subdirs.push(entry.path());
            }
        }

        queue.extend(subdirs);
    }

    Ok(None)
}

fn read_sorted(dir: &Path) -> anyhow::Result<Vec<fs::DirEntry>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut sorted_entries: Vec<_> = entries
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to read directory entries: {}", dir.display()))?;
    sorted_entries.sort_by_key(|e| e.file_name());
    Ok(sorted_entries)
}
