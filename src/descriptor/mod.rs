//! Project descriptor access
//!
//! A descriptor is the file that records the project's current version: a
//! Cargo manifest, an npm `package.json`, or a plain text file holding
//! nothing but the version string. The [DescriptorReader] trait abstracts
//! over them so resolution logic and tests never touch the filesystem
//! directly.
//!
//! # Overview
//!
//! The concrete implementations include:
//!
//! - [cargo::CargoTomlReader]: Cargo manifests, including workspace roots
//! - [npm::PackageJsonReader]: npm manifests
//! - [plain::PlainVersionReader]: files whose whole content is the version
//! - [mock::MockDescriptorReader]: a mock implementation for testing
//!
//! [reader_for] picks the implementation from the descriptor's file name.

pub mod cargo;
pub mod mock;
pub mod npm;
pub mod plain;

pub use cargo::CargoTomlReader;
pub use mock::MockDescriptorReader;
pub use npm::PackageJsonReader;
pub use plain::PlainVersionReader;

use std::path::Path;

use crate::error::{ReleaseResolveError, Result};

/// Read access to the current version recorded in a project descriptor
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads.
///
/// ## Error Handling
///
/// Implementations map I/O and format failures to
/// [ReleaseResolveError::DescriptorUnreadable] so callers see a single
/// failure shape regardless of descriptor kind.
pub trait DescriptorReader: Send + Sync {
    /// Extract the current version string
    ///
    /// The returned string is trimmed but not otherwise validated; semantic
    /// version checks happen during resolution.
    ///
    /// # Returns
    /// * `Ok(String)` - Non-empty version string from the descriptor
    /// * `Err` - If the file is missing, malformed, or carries no version
    fn current_version(&self) -> Result<String>;
}

/// Select a reader implementation from the descriptor's file name
///
/// `Cargo.toml` and other `.toml` files are read as Cargo manifests,
/// `package.json` and other `.json` files as npm manifests, and anything
/// else as a plain version file. XML descriptors are rejected up front
/// with a pointer at the supported kinds.
pub fn reader_for(path: &Path) -> Result<Box<dyn DescriptorReader>> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if file_name == "cargo.toml" || file_name.ends_with(".toml") {
        Ok(Box::new(CargoTomlReader::new(path)))
    } else if file_name == "package.json" || file_name.ends_with(".json") {
        Ok(Box::new(PackageJsonReader::new(path)))
    } else if file_name.ends_with(".xml") {
        Err(ReleaseResolveError::descriptor(
            path,
            "XML descriptors are not supported, use a Cargo.toml, package.json, or plain version file",
        ))
    } else {
        Ok(Box::new(PlainVersionReader::new(path)))
    }
}

/// Read a descriptor file into a string, mapping failures to descriptor errors
pub(crate) fn read_descriptor(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| ReleaseResolveError::descriptor(path, e.to_string()))
}
