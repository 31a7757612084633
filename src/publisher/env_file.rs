use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{ReleaseResolveError, Result};
use crate::publisher::{render, OutputFormat, VariablePublisher};

/// Publishes variables as `KEY=VALUE` lines into a dotenv-style file.
///
/// In append mode the variables are added to whatever the file already
/// holds, so several pipeline steps can contribute to one shared env file.
/// Otherwise the file is replaced. The full contents are staged in a
/// sibling `.tmp` file and renamed over the target, so a failed publish
/// leaves the previous file contents in place instead of a truncated file.
pub struct EnvFilePublisher {
    path: PathBuf,
    append: bool,
}

impl EnvFilePublisher {
    pub fn new(path: impl Into<PathBuf>, append: bool) -> Self {
        EnvFilePublisher {
            path: path.into(),
            append,
        }
    }

    /// Contents to keep in front of the new variables; a missing file
    /// appends to nothing.
    fn existing_contents(&self) -> Result<String> {
        if !self.append {
            return Ok(String::new());
        }
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(self.publish_error(e)),
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn publish_error(&self, e: std::io::Error) -> ReleaseResolveError {
        ReleaseResolveError::publish(format!(
            "unable to write env file [{}]: {}",
            self.path.display(),
            e
        ))
    }
}

impl VariablePublisher for EnvFilePublisher {
    fn publish(&mut self, variables: &BTreeMap<String, String>) -> Result<()> {
        let mut contents = self.existing_contents()?;
        contents.push_str(&render(OutputFormat::Env, variables)?);

        let staging = self.staging_path();
        std::fs::write(&staging, contents).map_err(|e| self.publish_error(e))?;
        std::fs::rename(&staging, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&staging);
            self.publish_error(e)
        })?;

        Ok(())
    }
}
