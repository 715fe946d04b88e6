//! Column alignment: shared per-group widths and the texts that pad to them.

pub mod registry;
pub mod text;

pub use registry::AlignmentRegistry;
pub use text::TrackedText;
