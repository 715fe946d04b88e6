//! Snapshot construction: one eager, depth-first walk
//!
//! Each directory is listed once, its children are filtered, sorted and
//! marked, and only then are its subdirectories walked. A directory's child
//! lists are therefore complete before anything can read them, and nothing
//! touches them afterwards.

use crate::error::LdirError;
use crate::tree::classify::{Classifier, ContentSniffer};
use crate::tree::node::{
    is_hidden_name, DirectoryNode, FileNode, ListingStatus, NodeKind, SnapshotNode,
};
use crate::tree::policy::{FileFilter, TraversalPolicy};
use crate::tree::snapshot::Snapshot;
use crate::tree::sort::{sort_directories, sort_files};
use crate::tree::walker::{self, ChildEntry};
use crate::types::NodeId;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Enumerates the immediate children of one directory
type Lister = fn(&Path) -> (Vec<ChildEntry>, ListingStatus);

/// Builds [`Snapshot`]s for a traversal policy
pub struct SnapshotBuilder {
    policy: TraversalPolicy,
    classifier: Box<dyn Classifier>,
    cancel: Option<Arc<AtomicBool>>,
    lister: Lister,
}

impl SnapshotBuilder {
    pub fn new(policy: TraversalPolicy) -> Self {
        Self {
            policy,
            classifier: Box::new(ContentSniffer),
            cancel: None,
            lister: walker::list_directory,
        }
    }

    /// Replace the classifier used by the `mime` sort strategy
    pub fn with_classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Stop expanding directories once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    #[cfg(test)]
    fn with_lister(mut self, lister: Lister) -> Self {
        self.lister = lister;
        self
    }

    pub fn policy(&self) -> &TraversalPolicy {
        &self.policy
    }

    /// Walk the tree below `root`
    ///
    /// Fails only when `root` is not an existing directory or a filter
    /// pattern is invalid; unreadable subdirectories are recorded as empty.
    pub fn build(&self, root: impl AsRef<Path>) -> Result<Snapshot, LdirError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(LdirError::InvalidRoot(root.to_path_buf()));
        }
        let root_path =
            dunce::canonicalize(root).map_err(|_| LdirError::InvalidRoot(root.to_path_buf()))?;
        let metadata = std::fs::metadata(&root_path)?;
        let filter = self.policy.file_filter()?;

        let writable = walker::is_writable(&root_path);
        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root_path.display().to_string());

        let root_node = SnapshotNode {
            name,
            path: root_path.clone(),
            inode: walker::path_inode(&metadata),
            level: 0,
            parent: None,
            is_last_sibling: false,
            is_immutable: !writable,
            mode: walker::permission_bits(&metadata),
            size: metadata.len(),
            kind: NodeKind::Directory(DirectoryNode::pending(writable)),
        };

        tracing::debug!(root = %root_path.display(), policy = ?self.policy, "Building snapshot");

        let mut walk = Walk {
            builder: self,
            filter,
            nodes: vec![root_node],
        };
        let mut ancestors = vec![root_path];
        walk.populate(0, &mut ancestors);

        Ok(Snapshot::from_parts(walk.nodes, self.policy.clone()))
    }
}

/// In-progress walk state
struct Walk<'b> {
    builder: &'b SnapshotBuilder,
    filter: FileFilter,
    nodes: Vec<SnapshotNode>,
}

impl Walk<'_> {
    fn cancelled(&self) -> bool {
        self.builder
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// List, filter, sort and mark the children of `dir_id`, then recurse
    ///
    /// `ancestors` holds the resolved paths from the root down to `dir_id`.
    fn populate(&mut self, dir_id: NodeId, ancestors: &mut Vec<PathBuf>) {
        if self.cancelled() {
            self.set_status(dir_id, ListingStatus::Cancelled);
            return;
        }

        let builder = self.builder;
        let policy = &builder.policy;
        let (dir_path, level, parent_writable) = {
            let dir = &self.nodes[dir_id];
            let writable = dir.as_directory().is_some_and(|d| d.writable);
            (dir.path.clone(), dir.level, writable)
        };

        let (children, status) = (builder.lister)(&dir_path);

        let mut files = Vec::new();
        let mut subdirectories = Vec::new();
        let mut symlinked = Vec::new();
        for child in children {
            if !policy.include_hidden && is_hidden_name(&child.name) {
                continue;
            }
            if child.is_dir {
                if !policy.include_subdirectories {
                    continue;
                }
                let is_symlink = child.is_symlink;
                let writable = child.writable;
                let id = self.push(child, dir_id, level, parent_writable, |_| {
                    NodeKind::Directory(DirectoryNode::pending(writable))
                });
                if is_symlink {
                    symlinked.push(id);
                }
                subdirectories.push(id);
            } else {
                if !self.filter.matches(&child.name) {
                    continue;
                }
                let id = self.push(child, dir_id, level, parent_writable, |name| {
                    NodeKind::File(FileNode::from_name(name))
                });
                files.push(id);
            }
        }

        sort_files(
            &self.nodes,
            &mut files,
            policy.sort,
            builder.classifier.as_ref(),
        );
        sort_directories(&self.nodes, &mut subdirectories, policy.sort);

        if let Some(&last) = files.last() {
            self.nodes[last].is_last_sibling = true;
        }
        if let Some(&last) = subdirectories.last() {
            self.nodes[last].is_last_sibling = true;
        }

        if let NodeKind::Directory(dir) = &mut self.nodes[dir_id].kind {
            dir.files = files;
            dir.subdirectories = subdirectories.clone();
            dir.status = status;
        }

        for child_id in subdirectories {
            let child_level = self.nodes[child_id].level;
            if !policy.expands(child_level) {
                continue;
            }
            let Some(resolved) = self.resolve_for_descent(child_id, &symlinked, ancestors) else {
                continue;
            };
            ancestors.push(resolved);
            self.populate(child_id, ancestors);
            ancestors.pop();
        }
    }

    /// Resolved path of a subdirectory about to be walked, or `None` when it
    /// must stay a boundary (unfollowed symlink or a cycle back to an ancestor)
    fn resolve_for_descent(
        &self,
        child_id: NodeId,
        symlinked: &[NodeId],
        ancestors: &[PathBuf],
    ) -> Option<PathBuf> {
        let child = &self.nodes[child_id];
        if !symlinked.contains(&child_id) {
            let parent = ancestors.last()?;
            return Some(parent.join(&child.name));
        }
        if !self.builder.policy.follow_symlinks {
            return None;
        }
        let resolved = dunce::canonicalize(&child.path).ok()?;
        if ancestors.iter().any(|a| a == &resolved) {
            tracing::warn!(path = %child.path.display(), "Symlink cycle, not expanding");
            return None;
        }
        Some(resolved)
    }

    fn push(
        &mut self,
        child: ChildEntry,
        parent: NodeId,
        parent_level: usize,
        parent_writable: bool,
        kind: impl FnOnce(&str) -> NodeKind,
    ) -> NodeId {
        let id = self.nodes.len();
        let kind = kind(&child.name);
        self.nodes.push(SnapshotNode {
            name: child.name,
            path: child.path,
            inode: child.inode,
            level: parent_level + 1,
            parent: Some(parent),
            is_last_sibling: false,
            is_immutable: !parent_writable,
            mode: child.mode,
            size: child.size,
            kind,
        });
        id
    }

    fn set_status(&mut self, dir_id: NodeId, status: ListingStatus) {
        if let NodeKind::Directory(dir) = &mut self.nodes[dir_id].kind {
            dir.status = status;
        }
    }
}
