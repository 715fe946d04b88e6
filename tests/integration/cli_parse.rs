use clap::{CommandFactory, Parser};
use ldir::render::ExtraField;
use ldir::tooling::cli::Cli;
use ldir::tree::SortStrategy;

#[test]
fn parse_valid_flag_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["ldir"],
        vec!["ldir", "some/dir"],
        vec!["ldir", "-r"],
        vec!["ldir", "--recursive", "--depth", "3"],
        vec!["ldir", "--depth", "-1"],
        vec!["ldir", "-d", "-a"],
        vec!["ldir", "--directories", "--hidden", "--follow-symlinks"],
        vec!["ldir", "-s", "mime"],
        vec!["ldir", "--sort", "none"],
        vec!["ldir", "-f", "*.rs", "-f", "*.toml"],
        vec!["ldir", "-x", "size", "--extra", "permissions"],
        vec!["ldir", "--edit", "-e", "vim", "-g", "-n -u NONE"],
        vec!["ldir", "--outline", "-r"],
        vec!["ldir", "-o", "listing.txt"],
        vec!["ldir", "--config", "ldir.toml", "--log-level", "debug"],
        vec!["ldir", "--log-format", "json", "--log-output", "file", "--log-file", "l.log"],
        vec!["ldir", "--log-output", "file+stderr"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_values() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["ldir", "--sort", "size"],
        vec!["ldir", "-x", "owner"],
        vec!["ldir", "--depth", "deep"],
        vec!["ldir", "--log-format", "xml"],
        vec!["ldir", "--log-output", "syslog"],
        vec!["ldir", "--outline", "--edit"],
        vec!["ldir", "a", "b"],
    ];

    for args in cases {
        assert!(
            Cli::try_parse_from(args.clone()).is_err(),
            "expected parse failure for args: {args:?}"
        );
    }
}

#[test]
fn parse_collects_repeated_flags() {
    let cli = Cli::try_parse_from([
        "ldir", "-f", "*.rs", "-f", "*.md", "-x", "size", "-x", "permissions", "-s", "type",
    ])
    .unwrap();
    assert_eq!(cli.filters, vec!["*.rs", "*.md"]);
    assert_eq!(cli.extras, vec![ExtraField::Size, ExtraField::Permissions]);
    assert_eq!(cli.sort, Some(SortStrategy::Type));
    assert_eq!(cli.path, std::path::PathBuf::from("."));
}

#[test]
fn help_lists_every_flag() {
    let help = Cli::command().render_long_help().to_string();
    for flag in [
        "--recursive",
        "--depth",
        "--directories",
        "--hidden",
        "--sort",
        "--filter",
        "--follow-symlinks",
        "--extra",
        "--editor",
        "--editor-args",
        "--edit",
        "--outline",
        "--output",
        "--config",
    ] {
        assert!(help.contains(flag), "help is missing {flag}");
    }
}
