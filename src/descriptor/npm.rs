use std::path::PathBuf;

use crate::descriptor::{read_descriptor, DescriptorReader};
use crate::error::{ReleaseResolveError, Result};

/// Reads the current version from an npm `package.json` manifest
pub struct PackageJsonReader {
    path: PathBuf,
}

impl PackageJsonReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PackageJsonReader { path: path.into() }
    }
}

impl DescriptorReader for PackageJsonReader {
    fn current_version(&self) -> Result<String> {
        let contents = read_descriptor(&self.path)?;
        let manifest: serde_json::Value = serde_json::from_str(&contents)
            .map_err(|e| ReleaseResolveError::descriptor(&self.path, e.to_string()))?;

        let version = manifest
            .get("version")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .unwrap_or_default();

        if version.is_empty() {
            return Err(ReleaseResolveError::descriptor(
                &self.path,
                "manifest has no top-level version field",
            ));
        }

        Ok(version.to_string())
    }
}
