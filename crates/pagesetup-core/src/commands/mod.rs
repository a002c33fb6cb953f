//! High-level commands for pagesetup operations.
//!
//! This module provides the public API the CLI calls. Each command takes an
//! [`AppContext`](crate::context::AppContext) and returns a serialisable
//! report.

pub mod detect;
mod error;
pub mod setup;
pub mod template;

pub use detect::{DetectCommand, DetectOptions, DetectReport};
pub use error::SetupError;
pub use setup::{SetupCommand, SetupOptions, SetupReport};
pub use template::TemplateCommand;
