//! Integration tests for snapshot building, rendering and the CLI

mod cli_parse;
mod cli_run;
mod render_listing;
mod snapshot_walk;
