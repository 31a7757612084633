//! Domain logic - pure version rules independent of descriptors and publishing

pub mod build_type;
pub mod policy;
pub mod snapshot;
pub mod version;

pub use build_type::BuildType;
pub use snapshot::{SnapshotMode, SNAPSHOT_LABEL};
pub use version::Version;
