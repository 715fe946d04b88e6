//! ldir: Directory Listings as Editable Text
//!
//! Takes a policy-driven snapshot of a directory tree and renders it as
//! column-aligned text lines, one per entry, suitable for editing in an
//! external editor.

pub mod align;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod render;
pub mod tooling;
pub mod tree;
pub mod types;

pub use align::{AlignmentRegistry, TrackedText};
pub use error::LdirError;
pub use render::{render_snapshot, RenderOptions};
pub use tree::{Snapshot, SnapshotBuilder, SortStrategy, TraversalPolicy};
