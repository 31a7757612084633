use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseResolveError, Result};
use crate::publisher::OutputFormat;

/// Represents the complete configuration for release-resolve.
///
/// Contains resolution inputs and output options; every command line flag
/// has a counterpart here so pipelines can keep their invocations short.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default descriptor file name.
fn default_descriptor() -> String {
    "Cargo.toml".to_string()
}

/// Returns the default console output format.
fn default_output_format() -> OutputFormat {
    OutputFormat::Env
}

/// Configuration for version resolution.
///
/// The build type has no default; it must arrive from here or from the
/// command line.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResolveConfig {
    #[serde(default)]
    pub build_type: Option<String>,

    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    #[serde(default)]
    pub no_snapshots: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            build_type: None,
            descriptor: default_descriptor(),
            no_snapshots: false,
        }
    }
}

/// Configuration for variable publishing.
///
/// When `file` is set the variables go into that env file, otherwise they
/// are printed to stdout in `format`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub format: OutputFormat,

    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub append: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_output_format(),
            file: None,
            append: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releaseresolve.toml` in current directory
/// 3. `~/.config/.releaseresolve.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ReleaseResolveError::config(format!("unable to read config file [{}]: {}", path, e))
        })?
    } else if Path::new("./releaseresolve.toml").exists() {
        fs::read_to_string("./releaseresolve.toml").map_err(|e| {
            ReleaseResolveError::config(format!(
                "unable to read config file [releaseresolve.toml]: {}",
                e
            ))
        })?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releaseresolve.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|e| {
                ReleaseResolveError::config(format!(
                    "unable to read config file [{}]: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseResolveError::config(format!("invalid config file: {}", e)))?;
    Ok(config)
}
