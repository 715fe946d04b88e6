//! Filesystem node types of a snapshot

use crate::types::{Inode, NodeId};
use std::path::{Path, PathBuf};

/// File node representation
#[derive(Debug, Clone)]
pub struct FileNode {
    /// Name without its last extension (`archive.tar` for `archive.tar.gz`)
    pub stem: String,
    /// Last extension without the dot; empty when there is none
    pub extension: String,
}

impl FileNode {
    pub fn from_name(name: &str) -> Self {
        let path = Path::new(name);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { stem, extension }
    }
}

/// Outcome of listing a directory during the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    /// Children were enumerated
    Populated,
    /// Listed but not expanded: depth limit, unfollowed symlink, or cycle
    Boundary,
    /// Listing was refused by the OS; shown as empty
    PermissionDenied,
    /// Listing failed for another OS reason; shown as empty
    Failed(String),
    /// The walk was cancelled before this directory was expanded
    Cancelled,
}

/// Directory node representation
#[derive(Debug, Clone)]
pub struct DirectoryNode {
    pub files: Vec<NodeId>,
    pub subdirectories: Vec<NodeId>,
    pub writable: bool,
    pub status: ListingStatus,
}

impl DirectoryNode {
    pub(crate) fn pending(writable: bool) -> Self {
        Self {
            files: Vec::new(),
            subdirectories: Vec::new(),
            writable,
            status: ListingStatus::Boundary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirectories.is_empty()
    }
}

/// Node kind
#[derive(Debug, Clone)]
pub enum NodeKind {
    File(FileNode),
    Directory(DirectoryNode),
}

/// One filesystem entry frozen at walk time
#[derive(Debug, Clone)]
pub struct SnapshotNode {
    pub name: String,
    pub path: PathBuf,
    pub inode: Inode,
    /// Nesting level; the root is 0
    pub level: usize,
    pub parent: Option<NodeId>,
    /// Last of its parent's files, or last of its parent's subdirectories
    pub is_last_sibling: bool,
    /// Parent directory is not writable (for the root: the root itself)
    pub is_immutable: bool,
    pub mode: u32,
    pub size: u64,
    pub kind: NodeKind,
}

impl SnapshotNode {
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File(_))
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match &self.kind {
            NodeKind::Directory(dir) => Some(dir),
            NodeKind::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match &self.kind {
            NodeKind::File(file) => Some(file),
            NodeKind::Directory(_) => None,
        }
    }

    /// True for directories without any listed children
    pub fn is_empty_dir(&self) -> bool {
        self.as_directory().is_some_and(DirectoryNode::is_empty)
    }
}

/// Hidden entries are dot-prefixed names
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
