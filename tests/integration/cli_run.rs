use clap::Parser;
use ldir::config::LdirConfig;
use ldir::render::{render_snapshot, RenderOptions};
use ldir::tooling::cli::{Cli, CliContext};
use ldir::tree::{Snapshot, SortStrategy, TraversalPolicy};
use ldir::LdirError;
use std::fs;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();
    fs::write(temp.path().join("B.md"), "b").unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();
    fs::write(temp.path().join("sub/c.log"), "c").unwrap();
    temp
}

fn run(args: &[&str]) -> Result<String, LdirError> {
    let cli = Cli::try_parse_from(args).unwrap();
    CliContext::new(LdirConfig::default()).execute(&cli)
}

#[test]
fn execute_matches_library_rendering() {
    let temp = fixture();
    let root = temp.path().to_str().unwrap();

    let text = run(&["ldir", root, "-r", "-s", "name"]).unwrap();

    let policy = TraversalPolicy {
        sort: SortStrategy::Name,
        ..TraversalPolicy::recursive()
    };
    let snapshot = Snapshot::build(temp.path(), &policy).unwrap();
    assert_eq!(text, render_snapshot(&snapshot, &RenderOptions::default()));
    assert!(text.contains("'c.log'"));
}

#[test]
fn execute_defaults_to_root_files_only() {
    let temp = fixture();
    let text = run(&["ldir", temp.path().to_str().unwrap()]).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(!text.contains("sub"));
}

#[test]
fn execute_writes_output_file() {
    let temp = fixture();
    let out_dir = TempDir::new().unwrap();
    let out = out_dir.path().join("listing.txt");

    let text = run(&[
        "ldir",
        temp.path().to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), text);
}

#[test]
fn execute_outline() {
    let temp = fixture();
    let text = run(&["ldir", temp.path().to_str().unwrap(), "-r", "--outline"]).unwrap();
    assert!(text.contains("└─ c.log"));
}

#[test]
fn execute_reports_invalid_root_and_filter() {
    let temp = fixture();
    let missing = temp.path().join("missing");
    assert!(matches!(
        run(&["ldir", missing.to_str().unwrap()]),
        Err(LdirError::InvalidRoot(_))
    ));
    assert!(matches!(
        run(&["ldir", temp.path().to_str().unwrap(), "-f", "a{"]),
        Err(LdirError::InvalidFilter { .. })
    ));
}

#[cfg(unix)]
#[test]
fn execute_edit_round_trip() {
    let temp = fixture();
    let root = temp.path().to_str().unwrap();
    let listed = run(&["ldir", root]).unwrap();
    let edited = run(&["ldir", root, "--edit", "-e", "true"]).unwrap();
    assert_eq!(listed, edited);
}
