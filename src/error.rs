use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for release-resolve operations
#[derive(Error, Debug)]
pub enum ReleaseResolveError {
    #[error("Version [{input}] is not a valid semantic version: {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Build type [{0}] is not recognizable")]
    UnrecognizedBuildType(String),

    #[error("Version [{version}] cannot be incremented: the {component} component is at its largest supported value")]
    VersionOverflow { version: String, component: String },

    #[error("Unable to read version from descriptor [{}]: {reason}", path.display())]
    DescriptorUnreadable { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to publish variables: {0}")]
    Publish(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-resolve
pub type Result<T> = std::result::Result<T, ReleaseResolveError>;

impl ReleaseResolveError {
    /// Create an invalid-version error naming the offending input
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseResolveError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an increment-overflow error naming the saturated component
    pub fn version_overflow(version: impl Into<String>, component: impl Into<String>) -> Self {
        ReleaseResolveError::VersionOverflow {
            version: version.into(),
            component: component.into(),
        }
    }

    /// Create a descriptor error naming the offending file
    pub fn descriptor(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ReleaseResolveError::DescriptorUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseResolveError::Config(msg.into())
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        ReleaseResolveError::Publish(msg.into())
    }
}
