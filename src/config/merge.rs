//! MergeService: orchestrates sources and deserializes to LdirConfig.

use crate::config::xdg;
use crate::config::LdirConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Keys whose environment values are comma-separated lists
const LIST_KEYS: [&str; 3] = ["traversal.filters", "render.extra_fields", "editor.args"];

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the standard sources plus an optional explicit file.
    /// Precedence: global file (lowest) -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<LdirConfig, ConfigError> {
        let mut builder = Config::builder();

        match xdg::global_config_path() {
            Ok(global) => {
                builder = builder.add_source(File::from(global).required(false));
            }
            Err(e) => tracing::debug!("Skipping global config: {}", e),
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = add_environment(builder).build()?;
        config.try_deserialize()
    }
}

/// Add environment variable overlay to builder.
/// Uses LDIR prefix and `__` as separator for nested keys.
fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    let mut environment = Environment::with_prefix("LDIR")
        .separator("__")
        .try_parsing(true)
        .list_separator(",");
    for key in LIST_KEYS {
        environment = environment.with_list_parse_key(key);
    }
    builder.add_source(environment)
}
