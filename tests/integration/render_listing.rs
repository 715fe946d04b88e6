use ldir::render::{render_snapshot, RenderOptions};
use ldir::tree::{Snapshot, SortStrategy, TraversalPolicy};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scenario() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::create_dir(root.join("empty")).unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub/b.log"), "beta").unwrap();
    temp
}

fn scenario_policy() -> TraversalPolicy {
    TraversalPolicy {
        max_depth: None,
        include_subdirectories: true,
        include_hidden: false,
        follow_symlinks: false,
        sort: SortStrategy::Name,
        filters: vec!["*".to_string()],
    }
}

fn render(root: &Path, policy: &TraversalPolicy) -> String {
    let snapshot = Snapshot::build(root, policy).unwrap();
    render_snapshot(&snapshot, &RenderOptions::default())
}

#[cfg(unix)]
fn marker(path: &Path) -> String {
    use std::os::unix::fs::MetadataExt;
    format!("{}:", fs::symlink_metadata(path).unwrap().ino())
}

#[cfg(unix)]
#[test]
fn scenario_renders_exact_listing() {
    let temp = scenario();
    let root = temp.path();

    let markers: Vec<String> = ["a.txt", "empty", "sub", "sub/b.log"]
        .iter()
        .map(|p| marker(&root.join(p)))
        .collect();
    let width = markers.iter().map(|m| m.len()).max().unwrap();
    let m: Vec<String> = markers
        .iter()
        .map(|m| format!("{:>width$}", m, width = width))
        .collect();

    let expected = format!(
        "{}   'a.txt'\n\n{}   ['empty']\n{}   ['sub']\n{}     'b.log'\n",
        m[0], m[1], m[2], m[3]
    );
    assert_eq!(render(root, &scenario_policy()), expected);
}

#[test]
fn hidden_entries_do_not_change_output() {
    let temp = scenario();
    let before = render(temp.path(), &scenario_policy());

    fs::write(temp.path().join(".secret"), "s").unwrap();
    fs::create_dir(temp.path().join(".cache")).unwrap();
    let after = render(temp.path(), &scenario_policy());

    assert_eq!(before, after);
    assert!(!after.contains(".secret"));
}

#[test]
fn hidden_entries_appear_when_included() {
    let temp = scenario();
    fs::write(temp.path().join(".secret"), "s").unwrap();
    let policy = TraversalPolicy {
        include_hidden: true,
        ..scenario_policy()
    };
    assert!(render(temp.path(), &policy).contains("'.secret'"));
}

#[test]
fn depth_zero_lists_only_root_children() {
    let temp = scenario();
    let policy = TraversalPolicy {
        include_subdirectories: true,
        ..TraversalPolicy::default()
    };
    let text = render(temp.path(), &policy);

    assert!(text.contains("  'a.txt'"));
    assert!(text.contains("  ['empty']"));
    assert!(text.contains("  ['sub']"));
    assert!(!text.contains("b.log"));
}

#[test]
fn rendering_is_idempotent() {
    let temp = scenario();
    let policy = scenario_policy();
    assert_eq!(render(temp.path(), &policy), render(temp.path(), &policy));
}

#[test]
fn filters_apply_to_files_only() {
    let temp = scenario();
    let policy = TraversalPolicy {
        filters: vec!["*.log".to_string()],
        ..scenario_policy()
    };
    let text = render(temp.path(), &policy);
    assert!(!text.contains("a.txt"));
    assert!(text.contains("['empty']"));
    assert!(text.contains("'b.log'"));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_renders_empty() {
    use std::os::unix::fs::PermissionsExt;

    if unsafe { libc::geteuid() } == 0 {
        // Permission bits do not restrict root.
        return;
    }

    let temp = scenario();
    let sub = temp.path().join("sub");
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o000)).unwrap();

    let snapshot = Snapshot::build(temp.path(), &scenario_policy());
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();
    let snapshot = snapshot.unwrap();

    assert_eq!(snapshot.stats().unreadable, 1);
    let text = render_snapshot(&snapshot, &RenderOptions::default());
    assert!(text.contains("  ['sub']"));
    assert!(!text.contains("b.log"));
}
