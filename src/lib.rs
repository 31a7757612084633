pub mod cli;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod placeholder;
pub mod publisher;
pub mod resolver;
pub mod ui;
pub mod workflow;

pub use error::{ReleaseResolveError, Result};
