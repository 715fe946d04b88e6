//! Immutable snapshot of a directory subtree

use crate::error::LdirError;
use crate::tree::builder::SnapshotBuilder;
use crate::tree::node::{ListingStatus, NodeKind, SnapshotNode};
use crate::tree::policy::TraversalPolicy;
use crate::types::NodeId;
use std::path::Path;

/// Arena of nodes produced by one walk
///
/// Index 0 is always the root directory. Parents are referenced by index,
/// so the tree holds no reference cycles and is dropped as a whole.
#[derive(Debug, Clone)]
pub struct Snapshot {
    nodes: Vec<SnapshotNode>,
    policy: TraversalPolicy,
}

/// Counts over a snapshot, root excluded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotStats {
    pub files: usize,
    pub directories: usize,
    pub boundary: usize,
    pub unreadable: usize,
}

impl Snapshot {
    pub const ROOT: NodeId = 0;

    /// Walk `root` with the default classifier
    pub fn build(root: impl AsRef<Path>, policy: &TraversalPolicy) -> Result<Self, LdirError> {
        SnapshotBuilder::new(policy.clone()).build(root)
    }

    pub(crate) fn from_parts(nodes: Vec<SnapshotNode>, policy: TraversalPolicy) -> Self {
        Self { nodes, policy }
    }

    pub fn root(&self) -> &SnapshotNode {
        &self.nodes[Self::ROOT]
    }

    pub fn get(&self, id: NodeId) -> Option<&SnapshotNode> {
        self.nodes.get(id)
    }

    pub fn parent(&self, node: &SnapshotNode) -> Option<&SnapshotNode> {
        node.parent.and_then(|id| self.nodes.get(id))
    }

    /// Files of a directory in sorted order; empty for files
    pub fn files<'a>(
        &'a self,
        dir: &'a SnapshotNode,
    ) -> impl Iterator<Item = &'a SnapshotNode> + 'a {
        let ids = dir.as_directory().map_or(&[][..], |d| d.files.as_slice());
        ids.iter().map(move |id| &self.nodes[*id])
    }

    /// Subdirectories of a directory in sorted order; empty for files
    pub fn subdirectories<'a>(
        &'a self,
        dir: &'a SnapshotNode,
    ) -> impl Iterator<Item = &'a SnapshotNode> + 'a {
        let ids = dir
            .as_directory()
            .map_or(&[][..], |d| d.subdirectories.as_slice());
        ids.iter().map(move |id| &self.nodes[*id])
    }

    pub fn policy(&self) -> &TraversalPolicy {
        &self.policy
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().is_empty_dir()
    }

    /// Depth-first walk below the root
    ///
    /// A directory's files come first, then each subdirectory immediately
    /// followed by its own contents. The root itself is not yielded.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            snapshot: self,
            stack: Vec::new(),
        };
        iter.push_children(Self::ROOT);
        iter
    }

    pub fn stats(&self) -> SnapshotStats {
        let mut stats = SnapshotStats::default();
        for node in self.iter() {
            match &node.kind {
                NodeKind::File(_) => stats.files += 1,
                NodeKind::Directory(dir) => {
                    stats.directories += 1;
                    match dir.status {
                        ListingStatus::Boundary | ListingStatus::Cancelled => {
                            stats.boundary += 1
                        }
                        ListingStatus::PermissionDenied | ListingStatus::Failed(_) => {
                            stats.unreadable += 1
                        }
                        ListingStatus::Populated => {}
                    }
                }
            }
        }
        stats
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a SnapshotNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over a [`Snapshot`]
pub struct Iter<'a> {
    snapshot: &'a Snapshot,
    stack: Vec<NodeId>,
}

impl Iter<'_> {
    fn push_children(&mut self, id: NodeId) {
        if let Some(dir) = self.snapshot.nodes[id].as_directory() {
            self.stack.extend(dir.subdirectories.iter().rev());
            self.stack.extend(dir.files.iter().rev());
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SnapshotNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_children(id);
        Some(&self.snapshot.nodes[id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_accessors() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.txt"), "t").unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();
        fs::write(temp.path().join("dir/inner.txt"), "i").unwrap();

        let snapshot = Snapshot::build(temp.path(), &TraversalPolicy::recursive()).unwrap();
        let root = snapshot.root();
        assert_eq!(root.level, 0);
        assert!(root.parent.is_none());
        assert!(snapshot.parent(root).is_none());

        let files: Vec<_> = snapshot.files(root).map(|n| n.name.as_str()).collect();
        assert_eq!(files, vec!["top.txt"]);
        let dirs: Vec<_> = snapshot.subdirectories(root).collect();
        assert_eq!(dirs.len(), 1);
        assert_eq!(snapshot.files(dirs[0]).count(), 1);
        assert_eq!(snapshot.files(snapshot.files(root).next().unwrap()).count(), 0);

        assert_eq!(snapshot.len(), 4);
        assert!(!snapshot.is_empty());
        assert_eq!(
            snapshot.stats(),
            SnapshotStats {
                files: 2,
                directories: 1,
                boundary: 0,
                unreadable: 0,
            }
        );
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        let snapshot = Snapshot::build(temp.path(), &TraversalPolicy::default()).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.iter().count(), 0);
    }
}
