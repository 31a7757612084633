//! Main workflow orchestration logic
//!
//! This module ties the pieces together: read the current version from a
//! descriptor, resolve the release and development versions, and publish
//! them as pipeline variables. It provides a clean separation between CLI
//! argument parsing and business logic.

use std::collections::BTreeMap;

use crate::descriptor::DescriptorReader;
use crate::domain::SnapshotMode;
use crate::error::Result;
use crate::publisher::{VariablePublisher, DEVELOPMENT_VERSION_VAR, RELEASE_VERSION_VAR};
use crate::resolver::{ReleaseResolver, Resolution};

/// Arguments for the resolve workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Build type token, already placeholder-expanded
    pub build_type: String,

    /// Snapshot handling mode
    pub snapshots: SnapshotMode,

    /// Preview mode - resolve but do not publish
    pub dry_run: bool,
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOutcome {
    /// Version string as read from the descriptor
    pub current_version: String,

    /// The resolved release and development versions
    pub resolution: Resolution,

    /// Whether the variables were handed to the publisher
    pub published: bool,
}

/// Main resolve workflow
///
/// Orchestrates the entire resolution process:
/// 1. Read the current version from the descriptor
/// 2. Resolve the release and development versions
/// 3. Publish both variables (skipped in dry-run mode)
///
/// Publishing only happens after every earlier step succeeded, so a failed
/// run never leaves variables behind.
///
/// # Arguments
///
/// * `options` - Workflow options (build type, snapshot mode, dry_run)
/// * `reader` - Descriptor holding the current version
/// * `publisher` - Destination for the resolved variables
///
/// # Returns
///
/// Result containing the resolved versions or the first error encountered
pub fn run<R, P>(
    options: &WorkflowOptions,
    reader: &R,
    publisher: &mut P,
) -> Result<WorkflowOutcome>
where
    R: DescriptorReader + ?Sized,
    P: VariablePublisher + ?Sized,
{
    let current_version = reader.current_version()?;

    let resolver = ReleaseResolver::new(options.snapshots);
    let resolution = resolver.resolve(&current_version, &options.build_type)?;

    let published = if options.dry_run {
        false
    } else {
        publisher.publish(&variables(&resolution))?;
        true
    };

    Ok(WorkflowOutcome {
        current_version,
        resolution,
        published,
    })
}

/// Variable map published for a resolution
pub fn variables(resolution: &Resolution) -> BTreeMap<String, String> {
    let mut variables = BTreeMap::new();
    variables.insert(
        RELEASE_VERSION_VAR.to_string(),
        resolution.release.to_string(),
    );
    variables.insert(
        DEVELOPMENT_VERSION_VAR.to_string(),
        resolution.development.to_string(),
    );
    variables
}
