//! Pure version transformations: build type to release version, release
//! version to next development version.

use crate::domain::build_type::BuildType;
use crate::domain::snapshot::{SnapshotMode, SNAPSHOT_LABEL};
use crate::domain::version::Version;
use crate::error::Result;

/// Compute the release version for a build type.
///
/// Major and minor releases always advance their component. The patch policy
/// depends on the snapshot mode: with snapshots disabled the descriptor holds
/// the last released version, so the patch component advances; with snapshots
/// enabled the descriptor already holds the release candidate, so the release
/// is the current normal triple as-is and the advance is deferred to the
/// development version. Every result is a plain triple without a pre-release
/// label. Fails only when the advanced component is already at its largest
/// supported value.
pub fn release_version(
    current: &Version,
    build_type: BuildType,
    snapshots: SnapshotMode,
) -> Result<Version> {
    match build_type {
        BuildType::Major => current.increment_major(),
        BuildType::Minor => current.increment_minor(),
        BuildType::Patch => {
            if snapshots.is_enabled() {
                Ok(current.normal())
            } else {
                current.increment_patch()
            }
        }
    }
}

/// Derive the next development version from a release version.
///
/// With snapshots enabled this is the release with the patch advanced and the
/// snapshot label attached; with snapshots disabled the development version
/// is the release itself. Fails only when the release patch component is
/// already at its largest supported value.
pub fn development_version(release: &Version, snapshots: SnapshotMode) -> Result<Version> {
    if snapshots.is_enabled() {
        Ok(release.increment_patch()?.with_pre_release(SNAPSHOT_LABEL))
    } else {
        Ok(release.clone())
    }
}
