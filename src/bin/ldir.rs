//! ldir CLI Binary
//!
//! Prints the rendered listing of a directory, or the edited text after an
//! editor round-trip.

use anyhow::Context;
use clap::Parser;
use ldir::logging::init_logging;
use ldir::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<Option<String>> {
    let config = cli.load_config().context("Failed to load configuration")?;

    let logging = cli.logging_config(&config.logging);
    if let Err(e) = init_logging(&logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let context = CliContext::new(config);
    let output = context
        .execute(cli)
        .with_context(|| format!("Failed to list {}", cli.path.display()))?;

    // With --output the text already went to the file.
    Ok(cli.output.is_none().then_some(output))
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Some(output)) => print!("{}", output),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
