//! CLI Tooling
//!
//! Command-line interface for ldir. Flags override the loaded configuration
//! for a single run.

use crate::config::{ConfigLoader, LdirConfig};
use crate::editor;
use crate::error::LdirError;
use crate::logging::{LogFormat, LogOutput, LoggingConfig};
use crate::render::{outline, render_snapshot, ExtraField, RenderOptions};
use crate::tree::{SnapshotBuilder, SortStrategy, TraversalPolicy};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// ldir - list a directory as editable, column-aligned text
#[derive(Parser, Debug)]
#[command(name = "ldir")]
#[command(about = "List a directory tree as editable, column-aligned text")]
pub struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Descend into subdirectories without a depth limit (unless --depth is given)
    #[arg(short, long)]
    pub recursive: bool,

    /// Maximum depth to expand; negative means unbounded
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Include subdirectories in the listing
    #[arg(short = 'd', long)]
    pub directories: bool,

    /// Include hidden (dot) entries
    #[arg(short = 'a', long)]
    pub hidden: bool,

    /// File sort order
    #[arg(short, long, value_enum)]
    pub sort: Option<SortStrategy>,

    /// Glob a file name must match (repeatable; none matches everything)
    #[arg(short = 'f', long = "filter")]
    pub filters: Vec<String>,

    /// Expand symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Extra column to append (repeatable)
    #[arg(short = 'x', long = "extra", value_enum)]
    pub extras: Vec<ExtraField>,

    /// Editor command for --edit
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Extra arguments passed to the editor, split on whitespace (quotes are not interpreted)
    #[arg(short = 'g', long, allow_hyphen_values = true)]
    pub editor_args: Option<String>,

    /// Open the listing in an editor and return the edited text
    #[arg(long)]
    pub edit: bool,

    /// Draw the snapshot as a tree outline instead of the listing
    #[arg(long, conflicts_with = "edit")]
    pub outline: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log output
    #[arg(long, value_enum)]
    pub log_output: Option<LogOutput>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply traversal flags over a configured policy
    pub fn traversal_policy(&self, base: &TraversalPolicy) -> TraversalPolicy {
        let mut policy = base.clone();
        if self.recursive {
            policy.include_subdirectories = true;
            policy.max_depth = None;
        }
        if self.directories {
            policy.include_subdirectories = true;
        }
        if let Some(depth) = self.depth {
            policy.max_depth = usize::try_from(depth).ok();
        }
        if self.hidden {
            policy.include_hidden = true;
        }
        if self.follow_symlinks {
            policy.follow_symlinks = true;
        }
        if let Some(sort) = self.sort {
            policy.sort = sort;
        }
        if !self.filters.is_empty() {
            policy.filters = self.filters.clone();
        }
        policy
    }

    /// Apply render flags over configured options
    pub fn render_options(&self, base: &RenderOptions) -> RenderOptions {
        if self.extras.is_empty() {
            base.clone()
        } else {
            RenderOptions {
                extra_fields: self.extras.clone(),
            }
        }
    }

    /// Apply logging flags over configured logging
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut logging = base.clone();
        if let Some(level) = &self.log_level {
            logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            logging.format = format;
        }
        if let Some(output) = self.log_output {
            logging.output = output;
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.clone());
        }
        logging
    }

    /// Load configuration, honoring --config
    pub fn load_config(&self) -> Result<LdirConfig, LdirError> {
        match &self.config {
            Some(path) => ConfigLoader::load_from_file(path),
            None => ConfigLoader::load(),
        }
    }
}

/// CLI context for executing a run
pub struct CliContext {
    config: LdirConfig,
}

impl CliContext {
    pub fn new(config: LdirConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LdirConfig {
        &self.config
    }

    /// Build, render and optionally edit the listing; returns the final text
    pub fn execute(&self, cli: &Cli) -> Result<String, LdirError> {
        let policy = cli.traversal_policy(&self.config.traversal);
        let options = cli.render_options(&self.config.render);

        let snapshot = SnapshotBuilder::new(policy).build(&cli.path)?;
        let stats = snapshot.stats();
        info!(
            root = %snapshot.root().path.display(),
            files = stats.files,
            directories = stats.directories,
            unreadable = stats.unreadable,
            "Snapshot built"
        );

        let mut text = if cli.outline {
            outline(&snapshot)
        } else {
            render_snapshot(&snapshot, &options)
        };

        if cli.edit {
            let command = cli
                .editor
                .as_deref()
                .or(self.config.editor.command.as_deref());
            let editor = editor::resolve_editor(command)?;
            let args: Vec<String> = match &cli.editor_args {
                Some(args) => editor::split_args(args),
                None => self.config.editor.args.clone(),
            };
            text = editor::edit_text(&editor, &args, &text)?;
        }

        if let Some(output) = &cli.output {
            std::fs::write(output, &text)?;
            info!(path = %output.display(), "Listing written");
        }

        Ok(text)
    }
}
