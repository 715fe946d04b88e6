//! Filesystem snapshot: policy-driven walk into an immutable node arena.

pub mod builder;
pub mod classify;
pub mod node;
pub mod policy;
pub mod snapshot;
mod sort;
mod walker;

pub use builder::SnapshotBuilder;
pub use classify::{Classifier, ContentSniffer};
pub use node::{DirectoryNode, FileNode, ListingStatus, NodeKind, SnapshotNode};
pub use policy::{FileFilter, SortStrategy, TraversalPolicy};
pub use snapshot::{Snapshot, SnapshotStats};
