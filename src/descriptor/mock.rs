use crate::descriptor::DescriptorReader;
use crate::error::{ReleaseResolveError, Result};

/// Mock descriptor for testing without filesystem access
pub struct MockDescriptorReader {
    version: String,
    fail: bool,
}

impl MockDescriptorReader {
    /// Create a mock that yields the given version
    pub fn new(version: impl Into<String>) -> Self {
        MockDescriptorReader {
            version: version.into(),
            fail: false,
        }
    }

    /// Create a mock whose reads always fail
    pub fn failing() -> Self {
        MockDescriptorReader {
            version: String::new(),
            fail: true,
        }
    }
}

impl DescriptorReader for MockDescriptorReader {
    fn current_version(&self) -> Result<String> {
        if self.fail {
            return Err(ReleaseResolveError::descriptor(
                "mock-descriptor",
                "simulated read failure",
            ));
        }
        Ok(self.version.clone())
    }
}
