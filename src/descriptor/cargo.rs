use std::path::PathBuf;

use crate::descriptor::{read_descriptor, DescriptorReader};
use crate::error::{ReleaseResolveError, Result};

/// Reads the current version from a Cargo manifest.
///
/// Looks at `package.version` first and falls back to
/// `workspace.package.version` so workspace root manifests work too. A
/// `version.workspace = true` entry is not a literal version and falls
/// through to the workspace lookup.
pub struct CargoTomlReader {
    path: PathBuf,
}

impl CargoTomlReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CargoTomlReader { path: path.into() }
    }

    fn extract_version(&self, manifest: &toml::Value) -> Option<String> {
        let package_version = manifest
            .get("package")
            .and_then(|package| package.get("version"))
            .and_then(toml::Value::as_str);

        package_version
            .or_else(|| {
                manifest
                    .get("workspace")
                    .and_then(|workspace| workspace.get("package"))
                    .and_then(|package| package.get("version"))
                    .and_then(toml::Value::as_str)
            })
            .map(|version| version.trim().to_string())
    }
}

impl DescriptorReader for CargoTomlReader {
    fn current_version(&self) -> Result<String> {
        let contents = read_descriptor(&self.path)?;
        let manifest: toml::Value = toml::from_str(&contents)
            .map_err(|e| ReleaseResolveError::descriptor(&self.path, e.to_string()))?;

        match self.extract_version(&manifest) {
            Some(version) if !version.is_empty() => Ok(version),
            _ => Err(ReleaseResolveError::descriptor(
                &self.path,
                "manifest has no package.version or workspace.package.version",
            )),
        }
    }
}
