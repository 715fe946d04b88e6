//! Core types shared by the snapshot and render layers.

/// NodeId: index of a node inside its owning snapshot's arena
pub type NodeId = usize;

/// Inode: platform inode number of a filesystem entry (0 where unsupported)
pub type Inode = u64;

/// MemberId: handle of one live member of an alignment group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub(crate) u64);
