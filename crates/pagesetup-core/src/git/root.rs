use std::path::{Path, PathBuf};

use git2::Repository;

/// Resolve the top-level directory of the working tree containing `start`.
///
/// Falls back to `start` when it is not inside a git working tree (including
/// bare repositories, which have none).
pub fn locate_root(start: &Path) -> PathBuf {
    match Repository::discover(start) {
        Ok(repo) => match repo.workdir() {
            Some(workdir) => {
                let root = strip_trailing_separator(workdir);
                tracing::debug!(root = %root.display(), "discovered git working tree");
                root
            }
            None => {
                tracing::debug!(path = %start.display(), "bare repository, using start path");
                start.to_path_buf()
            }
        },
        Err(err) => {
            tracing::debug!(path = %start.display(), error = %err, "not a git repository");
            start.to_path_buf()
        }
    }
}

/// Short name of the checked-out branch, if HEAD points at one.
pub fn current_branch(root: &Path) -> Option<String> {
    let repo = Repository::open(root).ok()?;
    let head = match repo.head() {
        Ok(head) => head,
        // Unborn branch: HEAD names a branch that has no commits yet.
        Err(err) if err.code() == git2::ErrorCode::UnbornBranch => {
            return unborn_branch_name(&repo);
        }
        Err(_) => return None,
    };
    if !head.is_branch() {
        return None;
    }
    head.shorthand().map(str::to_string)
}

fn unborn_branch_name(repo: &Repository) -> Option<String> {
    let head = repo.find_reference("HEAD").ok()?;
    let target = head.symbolic_target()?;
    target.strip_prefix("refs/heads/").map(str::to_string)
}

fn strip_trailing_separator(path: &Path) -> PathBuf {
    path.components().collect()
}
