use std::collections::BTreeMap;

use crate::error::{ReleaseResolveError, Result};
use crate::publisher::VariablePublisher;

/// Mock publisher for testing, capturing everything it is asked to publish
pub struct MockPublisher {
    published: Vec<BTreeMap<String, String>>,
    fail: bool,
}

impl MockPublisher {
    /// Create a new capturing mock publisher
    pub fn new() -> Self {
        MockPublisher {
            published: Vec::new(),
            fail: false,
        }
    }

    /// Create a mock whose publishes always fail
    pub fn failing() -> Self {
        MockPublisher {
            published: Vec::new(),
            fail: true,
        }
    }

    /// All variable maps published so far, in order
    pub fn published(&self) -> &[BTreeMap<String, String>] {
        &self.published
    }

    /// The most recently published variable map
    pub fn last(&self) -> Option<&BTreeMap<String, String>> {
        self.published.last()
    }
}

impl Default for MockPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl VariablePublisher for MockPublisher {
    fn publish(&mut self, variables: &BTreeMap<String, String>) -> Result<()> {
        if self.fail {
            return Err(ReleaseResolveError::publish("simulated publish failure"));
        }
        self.published.push(variables.clone());
        Ok(())
    }
}
