//! Release resolution: parse the current version, apply the increment policy,
//! derive the development version.

use crate::domain::{policy, BuildType, SnapshotMode, Version};
use crate::error::Result;

/// Successful resolution outcome: the release version and the next
/// development version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub release: Version,
    pub development: Version,
}

/// Resolves release and development versions from a current-version string
/// and a build-type token.
///
/// Every resolution is a pure function of its inputs: no state is held beyond
/// the snapshot mode, no I/O happens here, and a failure on any step is
/// terminal for that invocation. Callers may share one resolver across
/// threads or invocations freely.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseResolver {
    snapshots: SnapshotMode,
}

impl ReleaseResolver {
    /// Create a resolver for the given snapshot mode
    pub fn new(snapshots: SnapshotMode) -> Self {
        ReleaseResolver { snapshots }
    }

    /// Resolve the release and development versions.
    ///
    /// # Arguments
    /// * `current_version` - Version string extracted from the descriptor
    /// * `build_type_token` - Raw build-type token (case-insensitive)
    ///
    /// # Returns
    /// * `Ok(Resolution)` - Both derived versions
    /// * `Err` - `InvalidVersion` when the current version does not parse,
    ///   `UnrecognizedBuildType` when the token matches no policy,
    ///   `VersionOverflow` when an advanced component leaves the supported
    ///   range
    pub fn resolve(&self, current_version: &str, build_type_token: &str) -> Result<Resolution> {
        let current = Version::parse(current_version)?;
        let build_type: BuildType = build_type_token.parse()?;

        let release = policy::release_version(&current, build_type, self.snapshots)?;
        let development = policy::development_version(&release, self.snapshots)?;

        Ok(Resolution {
            release,
            development,
        })
    }
}
