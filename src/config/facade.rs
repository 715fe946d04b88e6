//! ConfigLoader facade delegating to merge service.

use super::merge::MergeService;
use super::LdirConfig;
use crate::error::LdirError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file and environment.
    pub fn load() -> Result<LdirConfig, LdirError> {
        Ok(MergeService::load(None)?)
    }

    /// Load configuration with a specific file layered over the global one.
    pub fn load_from_file(path: &Path) -> Result<LdirConfig, LdirError> {
        Ok(MergeService::load(Some(path))?)
    }

    /// Create default configuration.
    pub fn default() -> LdirConfig {
        LdirConfig::default()
    }
}
