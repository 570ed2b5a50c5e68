//! CLI Common Utilities
//!
//! Shared initialization for CLI commands.

use std::path::Path;
use tokio::runtime::Runtime;

use crate::config::{Config, ConfigLoader};
use crate::types::Result;

/// Command execution context
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Resolved configuration (defaults, files, environment)
    pub config: Config,
}

impl CommandContext {
    /// Resolve configuration, optionally layering an explicit `--config` file
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            config: ConfigLoader::load(config_path)?,
        })
    }
}

/// Runtime for commands that drive async work from the synchronous CLI
pub fn runtime() -> Result<Runtime> {
    Ok(Runtime::new()?)
}
