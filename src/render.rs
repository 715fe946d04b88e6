//! Listing renderer: snapshot nodes to aligned, editable text lines.

pub mod entry;
pub mod field;
pub mod listing;
pub mod outline;

pub use entry::{format_mode, Entry, IMMUTABLE_MARKER};
pub use field::{Field, FieldRole, MARKER_GROUP};
pub use listing::{render_snapshot, Listing};
pub use outline::outline;

use serde::{Deserialize, Serialize};

/// Optional columns appended after the name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExtraField {
    /// `ls -l` style permission string
    Permissions,
    /// Size in bytes
    Size,
}

/// Rendering configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub extra_fields: Vec<ExtraField>,
}
