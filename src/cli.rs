//! Command line and configuration merging
//!
//! Option values arrive here in a format independent of the argument
//! parser, so the precedence rules between flags and the configuration
//! file can be exercised without spawning the binary.

use crate::config::Config;
use crate::domain::SnapshotMode;
use crate::error::{ReleaseResolveError, Result};
use crate::placeholder;
use crate::publisher::OutputFormat;

/// Option values collected from the command line, before configuration
/// defaults apply.
///
/// Mirrors the binary's flags; `None` and `false` mean the flag was not
/// given.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    pub build_type: Option<String>,
    pub descriptor: Option<String>,
    pub no_snapshots: bool,
    pub output: Option<String>,
    pub append: bool,
    pub format: Option<String>,
}

/// Effective settings for one invocation after the command line and the
/// configuration file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub build_type: String,
    pub descriptor: String,
    pub snapshots: SnapshotMode,
    pub format: OutputFormat,
    pub output_file: Option<String>,
    pub append: bool,
}

/// Merge command line values over the configuration file.
///
/// A command line value wins wherever both sources carry one; boolean
/// flags are on when either source sets them. Placeholders in the build
/// type expand from the environment after the merge.
///
/// # Returns
/// * `Ok(Settings)` - Effective settings for the invocation
/// * `Err` - `Config` when no source supplies a build type or the format
///   token is unknown
pub fn merge(cli: CliOptions, config: Config) -> Result<Settings> {
    let build_type = cli.build_type.or(config.resolve.build_type).ok_or_else(|| {
        ReleaseResolveError::config(
            "No build type given, pass --build-type or set resolve.build_type in releaseresolve.toml",
        )
    })?;

    let format = match cli.format {
        Some(raw) => raw.parse::<OutputFormat>()?,
        None => config.output.format,
    };

    Ok(Settings {
        build_type: placeholder::expand(&build_type),
        descriptor: cli.descriptor.unwrap_or(config.resolve.descriptor),
        snapshots: SnapshotMode::from_no_snapshots(cli.no_snapshots || config.resolve.no_snapshots),
        format,
        output_file: cli.output.or(config.output.file),
        append: cli.append || config.output.append,
    })
}
