//! Read-only tree outline of a snapshot, for inspection.

use crate::tree::{Snapshot, SnapshotNode};

/// Draw the snapshot as a box-drawing tree, root first
///
/// Unlike the listing, the outline carries no markers and is not meant to
/// be edited.
pub fn outline(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    push_node(&mut out, snapshot.root());
    for node in snapshot.iter() {
        push_node(&mut out, node);
    }
    out
}

fn push_node(out: &mut String, node: &SnapshotNode) {
    if node.is_file() {
        let branch = if node.is_last_sibling { "└─" } else { "├─" };
        let indent = " ".repeat(node.level.saturating_sub(1));
        out.push_str(&format!("{}{} {}\n", indent, branch, node.name));
    } else {
        let indent = " ".repeat(node.level);
        out.push_str(&format!("{}* {}\n", indent, node.name));
        if node.is_empty_dir() {
            out.push_str(&format!("{}└─ <empty>\n", indent));
        }
    }
}
