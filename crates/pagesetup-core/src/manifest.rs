//! `package.json` reading.
//!
//! Only the fields detection needs are modelled; everything else in the
//! manifest is ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub scripts: BTreeMap<String, String>,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let bytes = std::fs::read(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse manifest bytes. The root must be a JSON object; a UTF-8 BOM is
    /// tolerated.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        serde_json::from_slice(bytes)
    }

    /// The `build` script command, if declared.
    pub fn build_script(&self) -> Option<&str> {
        self.scripts.get("build").map(String::as_str)
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_build_script() {
        let manifest = PackageManifest::from_slice(
            br#"{"name":"site","scripts":{"dev":"vite","build":"vite build"}}"#,
        )
        .unwrap();
        assert_eq!(manifest.name.as_deref(), Some("site"));
        assert_eq!(manifest.build_script(), Some("vite build"));
    }

    #[test]
    fn missing_scripts_is_not_an_error() {
        let manifest = PackageManifest::from_slice(br#"{"private": true}"#).unwrap();
        assert!(manifest.build_script().is_none());
    }

    #[test]
    fn dependencies_include_dev() {
        let manifest = PackageManifest::from_slice(
            br#"{"dependencies":{"react":"^18"},"devDependencies":{"next":"14.0.0"}}"#,
        )
        .unwrap();
        assert!(manifest.has_dependency("react"));
        assert!(manifest.has_dependency("next"));
        assert!(!manifest.has_dependency("vite"));
    }

    #[test]
    fn tolerates_bom() {
        let manifest = PackageManifest::from_slice(b"\xEF\xBB\xBF{\"scripts\":{\"build\":\"x\"}}")
            .unwrap();
        assert_eq!(manifest.build_script(), Some("x"));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(PackageManifest::from_slice(b"[1, 2]").is_err());
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = PackageManifest::load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().contains("package.json"));
    }
}
