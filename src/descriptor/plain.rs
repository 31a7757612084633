use std::path::PathBuf;

use crate::descriptor::{read_descriptor, DescriptorReader};
use crate::error::{ReleaseResolveError, Result};

/// Reads the current version from a file whose whole content is the version
/// string, such as a `VERSION` file at the repository root. Surrounding
/// whitespace and a trailing newline are tolerated.
pub struct PlainVersionReader {
    path: PathBuf,
}

impl PlainVersionReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PlainVersionReader { path: path.into() }
    }
}

impl DescriptorReader for PlainVersionReader {
    fn current_version(&self) -> Result<String> {
        let contents = read_descriptor(&self.path)?;
        let version = contents.trim();

        if version.is_empty() {
            return Err(ReleaseResolveError::descriptor(&self.path, "file is empty"));
        }
        if version.lines().count() > 1 {
            return Err(ReleaseResolveError::descriptor(
                &self.path,
                "expected a single version string, found multiple lines",
            ));
        }

        Ok(version.to_string())
    }
}
