//! Traversal policy: what the walk includes and how it orders it.

use crate::error::LdirError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

/// Sort strategy for the files of each directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Keep listing order
    None,
    /// Case-sensitive name
    Name,
    /// Case-insensitive name
    #[default]
    #[serde(alias = "IName")]
    Iname,
    /// Extension, then case-insensitive name
    Type,
    /// Classifier output, then case-insensitive name
    Mime,
}

/// Traversal configuration consumed by the snapshot builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalPolicy {
    /// Deepest level that is still expanded; `None` walks the whole tree.
    /// Directories one level below are listed but left empty.
    pub max_depth: Option<usize>,
    pub include_subdirectories: bool,
    pub include_hidden: bool,
    /// Expand directories reached through symbolic links
    pub follow_symlinks: bool,
    pub sort: SortStrategy,
    /// Glob patterns matched against file names; empty matches every file
    pub filters: Vec<String>,
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self {
            max_depth: Some(0),
            include_subdirectories: false,
            include_hidden: false,
            follow_symlinks: false,
            sort: SortStrategy::default(),
            filters: Vec::new(),
        }
    }
}

impl TraversalPolicy {
    /// Policy that walks everything below the root
    pub fn recursive() -> Self {
        Self {
            max_depth: None,
            include_subdirectories: true,
            ..Self::default()
        }
    }

    /// Whether a directory at `level` gets its children enumerated
    pub fn expands(&self, level: usize) -> bool {
        level == 0 || self.max_depth.map_or(true, |max| level <= max)
    }

    /// Compile the glob filters
    pub fn file_filter(&self) -> Result<FileFilter, LdirError> {
        FileFilter::compile(&self.filters)
    }
}

/// Compiled file-name filter
#[derive(Debug, Clone)]
pub struct FileFilter {
    set: Option<GlobSet>,
}

impl FileFilter {
    pub fn compile(patterns: &[String]) -> Result<Self, LdirError> {
        if patterns.is_empty() {
            return Ok(Self { set: None });
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| LdirError::InvalidFilter {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| LdirError::InvalidFilter {
            pattern: patterns.join(","),
            source,
        })?;
        Ok(Self { set: Some(set) })
    }

    /// True when the name matches at least one pattern, or there are none
    pub fn matches(&self, name: &str) -> bool {
        self.set.as_ref().map_or(true, |set| set.is_match(name))
    }
}
