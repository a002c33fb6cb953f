//! GitHub Actions workflow generation.
//!
//! Two embedded templates, one per [`ProjectType`](crate::types::ProjectType).
//! Rendering with [`WorkflowParams::default`] reproduces them unchanged apart
//! from placeholder substitution.

pub mod render;
pub mod writer;

pub use render::{WorkflowParams, WorkflowTemplate, publish_advice};
pub use writer::{WorkflowWrite, WriteOutcome, write_workflow};
