use crate::error::{ReleaseResolveError, Result};
use std::fmt;

/// Semantic version representation: a MAJOR.MINOR.PATCH triple with an
/// optional pre-release label.
///
/// Versions are values: parsing and every increment operation produce a new
/// `Version`, nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub pre_release: Option<String>,
}

impl Version {
    /// Create a new version without a pre-release label
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Return this version with the given pre-release label attached
    pub fn with_pre_release(&self, label: impl Into<String>) -> Self {
        Version {
            pre_release: Some(label.into()),
            ..self.clone()
        }
    }

    /// Parse a version string (e.g., "1.2.3", "v1.2.3", "1.2.3-SNAPSHOT").
    ///
    /// Accepts exactly the `MAJOR.MINOR.PATCH[-PRERELEASE]` shape, with a
    /// single leading 'v' or 'V' stripped. Numeric components must be plain
    /// decimal digits without leading zeros, so that rendering a parsed
    /// version reproduces the normalized input. Whitespace is not trimmed;
    /// callers must supply a clean string.
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err` - `InvalidVersion` naming the offending input and the reason
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(ReleaseResolveError::invalid_version(
                input,
                "empty version string",
            ));
        }

        let normalized = input
            .strip_prefix('v')
            .or_else(|| input.strip_prefix('V'))
            .unwrap_or(input);

        let (core, label) = match normalized.split_once('-') {
            Some((core, label)) => (core, Some(label)),
            None => (normalized, None),
        };

        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseResolveError::invalid_version(
                input,
                "expected MAJOR.MINOR.PATCH",
            ));
        }

        let major = parse_component("major", parts[0], input)?;
        let minor = parse_component("minor", parts[1], input)?;
        let patch = parse_component("patch", parts[2], input)?;

        let pre_release = match label {
            Some(label) => Some(parse_pre_release(label, input)?),
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
        })
    }

    /// The bare MAJOR.MINOR.PATCH triple, with any pre-release label dropped
    pub fn normal(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Next major version: `(major+1, 0, 0)`, no pre-release.
    ///
    /// Fails when major is already at the largest supported value.
    pub fn increment_major(&self) -> Result<Self> {
        Ok(Version::new(self.bumped(self.major, "major")?, 0, 0))
    }

    /// Next minor version: `(major, minor+1, 0)`, no pre-release.
    ///
    /// Fails when minor is already at the largest supported value.
    pub fn increment_minor(&self) -> Result<Self> {
        Ok(Version::new(self.major, self.bumped(self.minor, "minor")?, 0))
    }

    /// Next patch version: `(major, minor, patch+1)`, no pre-release.
    ///
    /// Fails when patch is already at the largest supported value.
    pub fn increment_patch(&self) -> Result<Self> {
        Ok(Version::new(
            self.major,
            self.minor,
            self.bumped(self.patch, "patch")?,
        ))
    }

    /// Add one to a component; overflow surfaces as an error instead of
    /// wrapping.
    fn bumped(&self, component: u32, name: &str) -> Result<u32> {
        component
            .checked_add(1)
            .ok_or_else(|| ReleaseResolveError::version_overflow(self.to_string(), name))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(label) = &self.pre_release {
            write!(f, "-{}", label)?;
        }
        Ok(())
    }
}

/// Parse one numeric component, naming the component and the whole input on
/// failure. Leading zeros and sign characters are rejected: they would parse
/// but no longer render back to the original string.
fn parse_component(name: &str, raw: &str, input: &str) -> Result<u32> {
    if raw.is_empty() {
        return Err(ReleaseResolveError::invalid_version(
            input,
            format!("{} component is empty", name),
        ));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseResolveError::invalid_version(
            input,
            format!("{} component [{}] is not a number", name, raw),
        ));
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return Err(ReleaseResolveError::invalid_version(
            input,
            format!("{} component [{}] has a leading zero", name, raw),
        ));
    }
    raw.parse::<u32>().map_err(|_| {
        ReleaseResolveError::invalid_version(
            input,
            format!("{} component [{}] is out of range", name, raw),
        )
    })
}

fn parse_pre_release(label: &str, input: &str) -> Result<String> {
    if label.is_empty() {
        return Err(ReleaseResolveError::invalid_version(
            input,
            "pre-release label is empty",
        ));
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(ReleaseResolveError::invalid_version(
            input,
            format!("pre-release label [{}] contains invalid characters", label),
        ));
    }
    Ok(label.to_string())
}
