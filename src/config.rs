//! Configuration: traversal, render, logging and editor settings.

pub mod facade;
mod merge;
pub mod xdg;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::render::RenderOptions;
use crate::tree::TraversalPolicy;
use serde::{Deserialize, Serialize};

/// Editor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command; resolved from the environment when unset
    pub command: Option<String>,
    /// Extra arguments passed before the listing file
    pub args: Vec<String>,
}

/// Top-level ldir configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LdirConfig {
    pub traversal: TraversalPolicy,
    pub render: RenderOptions,
    pub logging: LoggingConfig,
    pub editor: EditorConfig,
}
