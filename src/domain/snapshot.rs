use std::fmt;

/// Pre-release label attached to snapshot development versions
pub const SNAPSHOT_LABEL: &str = "SNAPSHOT";

/// Whether development versions are published as snapshots.
///
/// The two modes change what the patch policy does to the release version and
/// whether the development version carries the snapshot label; see
/// [`crate::domain::policy`]. Constructed at the boundary from the
/// host-facing `no_snapshots` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotMode {
    Enabled,
    Disabled,
}

impl SnapshotMode {
    /// Map the host-facing `no_snapshots` flag onto a mode
    pub fn from_no_snapshots(no_snapshots: bool) -> Self {
        if no_snapshots {
            SnapshotMode::Disabled
        } else {
            SnapshotMode::Enabled
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, SnapshotMode::Enabled)
    }
}

impl fmt::Display for SnapshotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotMode::Enabled => write!(f, "snapshots"),
            SnapshotMode::Disabled => write!(f, "no-snapshots"),
        }
    }
}
