use std::collections::BTreeMap;

use crate::error::Result;
use crate::publisher::{render, OutputFormat, VariablePublisher};

/// Publishes variables to stdout in the configured format.
///
/// Stdout carries nothing but the rendered variables; status and error
/// messages go to stderr. This keeps `$(release-resolve ...)` and pipes
/// into other tools clean.
pub struct ConsolePublisher {
    format: OutputFormat,
}

impl ConsolePublisher {
    pub fn new(format: OutputFormat) -> Self {
        ConsolePublisher { format }
    }
}

impl VariablePublisher for ConsolePublisher {
    fn publish(&mut self, variables: &BTreeMap<String, String>) -> Result<()> {
        let rendered = render(self.format, variables)?;
        print!("{}", rendered);
        Ok(())
    }
}
