//! Git helpers for locating the repository being set up.
//!
//! Only read access is needed: the working tree root and the checked-out
//! branch. Nothing is committed or pushed.

mod root;

pub use root::{current_branch, locate_root};
