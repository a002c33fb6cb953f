//! Filesystem primitives shared across features.

pub mod marker;
pub mod scan;

pub use marker::{MarkerOutcome, NOJEKYLL_FILE, ensure_nojekyll};
pub use scan::{INDEX_FILE, find_index_html};
