//! Publishing resolved versions for later pipeline steps
//!
//! Resolved versions leave the process as named variables. The
//! [VariablePublisher] trait abstracts over the destinations so the workflow
//! stays independent of where the variables end up:
//!
//! - [env_file::EnvFilePublisher]: a dotenv-style file for other steps to source
//! - [console::ConsolePublisher]: stdout, in a choice of [OutputFormat]
//! - [mock::MockPublisher]: a capturing implementation for testing
//!
//! Variables travel as a `BTreeMap` so output ordering is deterministic.

pub mod console;
pub mod env_file;
pub mod mock;

pub use console::ConsolePublisher;
pub use env_file::EnvFilePublisher;
pub use mock::MockPublisher;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseResolveError, Result};

/// Variable name under which the release version is published
pub const RELEASE_VERSION_VAR: &str = "RELEASE_VERSION";

/// Variable name under which the development version is published
pub const DEVELOPMENT_VERSION_VAR: &str = "DEVELOPMENT_VERSION";

/// Destination for resolved version variables
///
/// ## Error Handling
///
/// Implementations map their failures to
/// [ReleaseResolveError::Publish] with enough context to name the
/// destination that failed.
pub trait VariablePublisher: Send + Sync {
    /// Publish the given variables
    ///
    /// The full variable map is rendered before any output is written, so a
    /// rendering failure publishes nothing.
    fn publish(&mut self, variables: &BTreeMap<String, String>) -> Result<()>;
}

/// Rendering used when variables are written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `KEY=VALUE` lines, same shape as the env file
    Env,
    /// `export KEY="VALUE"` lines for direct shell sourcing
    Exports,
    /// A single JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReleaseResolveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "env" => Ok(OutputFormat::Env),
            "exports" => Ok(OutputFormat::Exports),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ReleaseResolveError::config(format!(
                "Unknown output format [{}], expected env, exports, or json",
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Env => "env",
            OutputFormat::Exports => "exports",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Render variables in the given format, newline terminated
pub fn render(format: OutputFormat, variables: &BTreeMap<String, String>) -> Result<String> {
    match format {
        OutputFormat::Env => {
            let mut out = String::new();
            for (name, value) in variables {
                out.push_str(&format!("{}={}\n", name, value));
            }
            Ok(out)
        }
        OutputFormat::Exports => {
            let mut out = String::new();
            for (name, value) in variables {
                out.push_str(&format!("export {}=\"{}\"\n", name, value));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(variables)
                .map_err(|e| ReleaseResolveError::publish(e.to_string()))?;
            out.push('\n');
            Ok(out)
        }
    }
}
