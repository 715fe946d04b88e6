//! Whole-tree listing: aligned entries plus directory block separators.

use crate::align::AlignmentRegistry;
use crate::render::entry::Entry;
use crate::render::RenderOptions;
use crate::tree::Snapshot;
use std::fmt;

/// Every entry of a snapshot, aligned against one registry
///
/// All entries are constructed before any line is rendered, so each group
/// has reached its final width by the time the text is produced. Dropping
/// the listing releases its texts from the registry.
#[derive(Debug)]
pub struct Listing<'r> {
    entries: Vec<Entry<'r>>,
}

impl<'r> Listing<'r> {
    pub fn build(
        snapshot: &Snapshot,
        registry: &'r AlignmentRegistry,
        options: &RenderOptions,
    ) -> Self {
        let entries: Vec<_> = snapshot
            .iter()
            .map(|node| Entry::from_node(registry, snapshot, node, options))
            .collect();
        tracing::debug!(entries = entries.len(), "Built listing");
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry<'r>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the listing text
    ///
    /// A blank line opens each directory block: it precedes a directory entry
    /// that follows a file, starts the listing, or changes nesting level.
    /// Sibling directories at one level stay together.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut after_file = true;
        let mut last_level: Option<usize> = None;

        for entry in &self.entries {
            if entry.is_dir() {
                if after_file || last_level != Some(entry.level()) {
                    out.push('\n');
                }
                after_file = false;
            } else {
                after_file = true;
            }
            last_level = Some(entry.level());
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render a snapshot with a registry scoped to this call
pub fn render_snapshot(snapshot: &Snapshot, options: &RenderOptions) -> String {
    let registry = AlignmentRegistry::new();
    let listing = Listing::build(snapshot, &registry, options);
    listing.render()
}
