//! TOML parser with helpful error messages

use super::schema::SetupConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse pagesetup.toml with detailed error messages
pub fn parse_config_file(path: &Path) -> Result<SetupConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&content).with_context(|| {
        format!("Failed to parse config file: {}", path.display())
    })
}

/// Parse pagesetup.toml content from string
pub fn parse_config_str(content: &str) -> Result<SetupConfig> {
    let config: SetupConfig = toml::from_str(content)
        .map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Point at the offending line when the parser reports a location
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let Some(span) = error.span() else {
        return anyhow::anyhow!("TOML parsing error: {}", error.message());
    };

    let offset = span.start.min(content.len());
    let line_num = content[..offset].matches('\n').count() + 1;
    let line = content.lines().nth(line_num - 1).unwrap_or_default();

    anyhow::anyhow!(
        "TOML parsing error at line {}: {}\n  {:4} | {}",
        line_num,
        error.message().trim(),
        line_num,
        line
    )
}
