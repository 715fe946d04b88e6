//! One listing line per snapshot node.

use crate::align::AlignmentRegistry;
use crate::render::field::Field;
use crate::render::{ExtraField, RenderOptions};
use crate::tree::{NodeKind, Snapshot, SnapshotNode};
use std::fmt;

/// Sentinel marker for entries whose parent directory is not writable
pub const IMMUTABLE_MARKER: &str = "#";

/// Ordered fields of one node's line
///
/// Format: `<marker>: <name> [| <extra> [; <extra>] ...]`
#[derive(Debug)]
pub struct Entry<'r> {
    is_dir: bool,
    level: usize,
    fields: Vec<Field<'r>>,
}

impl<'r> Entry<'r> {
    pub fn from_node(
        registry: &'r AlignmentRegistry,
        snapshot: &Snapshot,
        node: &SnapshotNode,
        options: &RenderOptions,
    ) -> Self {
        let group = disambiguator(snapshot, node);

        let marker = if node.is_immutable {
            IMMUTABLE_MARKER.to_string()
        } else {
            node.inode.to_string()
        };
        let name = if node.is_dir() {
            format!("['{}']", node.name)
        } else {
            format!("'{}'", node.name)
        };

        let mut fields = Vec::with_capacity(2 + options.extra_fields.len());
        fields.push(Field::new(registry, 0, marker, node.level, &group));
        fields.push(Field::new(registry, 1, name, node.level, &group));
        for extra in &options.extra_fields {
            let index = fields.len();
            let value = extra_value(*extra, node);
            fields.push(Field::new(registry, index, value, node.level, &group));
        }

        Self {
            is_dir: node.is_dir(),
            level: node.level,
            fields,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_file(&self) -> bool {
        !self.is_dir
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn fields(&self) -> &[Field<'r>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::new();
        for field in &self.fields {
            line.push_str(&field.padded());
            line.push(' ');
        }
        f.write_str(line.trim_end())
    }
}

/// Group scope for the non-marker columns of `node`
///
/// Files align with their siblings. When subdirectories are expanded, a
/// non-empty directory aligns with its own children and an empty one with
/// its siblings.
fn disambiguator(snapshot: &Snapshot, node: &SnapshotNode) -> String {
    let parent_path = snapshot
        .parent(node)
        .map(|p| p.path.display().to_string())
        .unwrap_or_else(|| "root".to_string());

    match &node.kind {
        NodeKind::Directory(dir) if snapshot.policy().max_depth != Some(0) => {
            if dir.is_empty() {
                parent_path
            } else {
                node.path.display().to_string()
            }
        }
        _ => parent_path,
    }
}

fn extra_value(extra: ExtraField, node: &SnapshotNode) -> String {
    match extra {
        ExtraField::Permissions => format_mode(node.mode, node.is_dir()),
        ExtraField::Size => node.size.to_string(),
    }
}

/// `ls -l` style permission string, e.g. `drwxr-xr-x`
pub fn format_mode(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });

    // (read, write, execute, special bit, special char)
    let triplets = [
        (0o400, 0o200, 0o100, 0o4000, 's'),
        (0o040, 0o020, 0o010, 0o2000, 's'),
        (0o004, 0o002, 0o001, 0o1000, 't'),
    ];
    for (r, w, x, special, special_char) in triplets {
        out.push(if mode & r != 0 { 'r' } else { '-' });
        out.push(if mode & w != 0 { 'w' } else { '-' });
        out.push(match (mode & x != 0, mode & special != 0) {
            (true, true) => special_char,
            (false, true) => special_char.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        });
    }
    out
}
