use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Repository root does not exist or is not a directory: {}", root.display())]
    RootNotFound { root: PathBuf },

    #[error("No index.html found under {}. Cannot proceed.", root.display())]
    IndexNotFound { root: PathBuf },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
