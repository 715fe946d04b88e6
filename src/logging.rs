//! Logging System
//!
//! Structured logging through the `tracing` crate. Log output never mixes with
//! the listing on stdout unless explicitly configured to.

use crate::error::LdirError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Level filter override, in `EnvFilter` directive syntax
pub const LOG_ENV: &str = "LDIR_LOG";
pub const LOG_FORMAT_ENV: &str = "LDIR_LOG_FORMAT";
pub const LOG_OUTPUT_ENV: &str = "LDIR_LOG_OUTPUT";
pub const LOG_FILE_ENV: &str = "LDIR_LOG_FILE";

/// Log line encoding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Where log lines go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stdout,
    #[default]
    Stderr,
    File,
    #[serde(rename = "file+stderr")]
    #[value(name = "file+stderr")]
    FileStderr,
    /// stdout and stderr
    Both,
}

impl LogOutput {
    fn to_file(self) -> bool {
        matches!(self, LogOutput::File | LogOutput::FileStderr)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// trace, debug, info, warn, error or off
    pub level: String,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Log file when output includes a file; `None` uses the state directory
    pub file: Option<PathBuf>,
    /// ANSI colors for terminal text output
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "warn".to_string(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            file: None,
            color: true,
        }
    }
}

impl LoggingConfig {
    /// Apply `LDIR_LOG_FORMAT` and `LDIR_LOG_OUTPUT` over the configured values
    fn with_env_overrides(&self) -> Result<Self, LdirError> {
        let mut effective = self.clone();
        if let Some(format) = env_value(LOG_FORMAT_ENV)? {
            effective.format = format;
        }
        if let Some(output) = env_value(LOG_OUTPUT_ENV)? {
            effective.output = output;
        }
        Ok(effective)
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

fn env_value<T: ValueEnum>(key: &str) -> Result<Option<T>, LdirError> {
    match std::env::var(key) {
        Ok(raw) if !raw.is_empty() => T::from_str(&raw, true)
            .map(Some)
            .map_err(|e| LdirError::ConfigError(format!("Invalid {}: {}", key, e))),
        _ => Ok(None),
    }
}

/// Resolve the log file path with precedence: CLI, LDIR_LOG_FILE env, config file, default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, LdirError> {
    let env_file = std::env::var_os(LOG_FILE_ENV).map(PathBuf::from);
    [cli_file, env_file, config_file]
        .into_iter()
        .flatten()
        .find(|p| !p.as_os_str().is_empty())
        .map_or_else(default_log_file_path, Ok)
}

fn default_log_file_path() -> Result<PathBuf, LdirError> {
    let project_dirs = directories::ProjectDirs::from("", "ldir", "ldir").ok_or_else(|| {
        LdirError::ConfigError("Could not determine platform state directory".to_string())
    })?;
    let state_dir = project_dirs.state_dir().ok_or_else(|| {
        LdirError::ConfigError("Platform state directory not available".to_string())
    })?;
    Ok(state_dir.join("ldir.log"))
}

/// Install the global subscriber
///
/// Environment variables win over `config`, which already carries CLI
/// overrides. Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LdirError> {
    let installed = if !config.enabled {
        Registry::default()
            .with(EnvFilter::new("off"))
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init()
    } else {
        let config = config.with_env_overrides()?;
        let writer = make_writer(&config)?;
        let subscriber = Registry::default().with(config.env_filter());
        match config.format {
            LogFormat::Json => subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(writer),
                )
                .try_init(),
            LogFormat::Text => subscriber
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(config.color && !config.output.to_file())
                        .with_writer(writer),
                )
                .try_init(),
        }
    };

    installed.map_err(|e| LdirError::ConfigError(format!("Failed to install logger: {}", e)))
}

fn make_writer(config: &LoggingConfig) -> Result<BoxMakeWriter, LdirError> {
    Ok(match config.output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::Both => BoxMakeWriter::new(std::io::stdout.and(std::io::stderr)),
        LogOutput::File => BoxMakeWriter::new(Mutex::new(open_log_file(config)?)),
        LogOutput::FileStderr => {
            BoxMakeWriter::new(Mutex::new(open_log_file(config)?).and(std::io::stderr))
        }
    })
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, LdirError> {
    let path = resolve_log_file_path(None, config.file.clone())?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            LdirError::ConfigError(format!("Failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| LdirError::ConfigError(format!("Failed to open {}: {}", path.display(), e)))
}
