//! Configuration for the setup run
//!
//! Two optional layers, both named `pagesetup.toml`:
//! - Global: the platform config directory
//! - Project: the repository root, committed alongside the site

pub mod merge;
pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use merge::merge_configs;
pub use parser::{parse_config_file, parse_config_str};
pub use paths::{CONFIG_FILE_NAME, config_path_for_scope, default_global_config_dir};
pub use schema::SetupConfig;
pub use store::{ConfigStore, load_merged};
