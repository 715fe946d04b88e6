//! Tooling & Integration Layer
//!
//! Command-line surface over snapshot building, rendering and the editor
//! round-trip.

pub mod cli;

pub use cli::{Cli, CliContext};
