use crate::error::ReleaseResolveError;
use std::fmt;
use std::str::FromStr;

/// Increment policy selected by the caller: which version component the next
/// release advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Major,
    Minor,
    Patch,
}

impl BuildType {
    /// Get the build type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Major => "major",
            BuildType::Minor => "minor",
            BuildType::Patch => "patch",
        }
    }
}

impl FromStr for BuildType {
    type Err = ReleaseResolveError;

    /// Resolve a raw build-type token. Matching is case-insensitive;
    /// "bug-fix" is an accepted alias for the patch policy. Anything else is
    /// an `UnrecognizedBuildType` carrying the offending token.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_lowercase().as_str() {
            "major" => Ok(BuildType::Major),
            "minor" => Ok(BuildType::Minor),
            "patch" | "bug-fix" => Ok(BuildType::Patch),
            _ => Err(ReleaseResolveError::UnrecognizedBuildType(
                token.to_string(),
            )),
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
