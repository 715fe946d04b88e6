use ldir::tree::{ListingStatus, Snapshot, SnapshotBuilder, SortStrategy, TraversalPolicy};
use std::fs;
use tempfile::TempDir;

fn mixed_case_dirs() -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in ["Gamma", "alpha", "Beta"] {
        fs::create_dir(temp.path().join(name)).unwrap();
    }
    fs::write(temp.path().join("Zed.txt"), "z").unwrap();
    fs::write(temp.path().join("apple.rs"), "a").unwrap();
    temp
}

fn dir_names(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .subdirectories(snapshot.root())
        .map(|n| n.name.clone())
        .collect()
}

fn file_names(snapshot: &Snapshot) -> Vec<String> {
    snapshot
        .files(snapshot.root())
        .map(|n| n.name.clone())
        .collect()
}

#[test]
fn subdirectories_sort_case_insensitively_for_every_ordering_strategy() {
    let temp = mixed_case_dirs();
    for sort in [
        SortStrategy::Name,
        SortStrategy::Iname,
        SortStrategy::Type,
        SortStrategy::Mime,
    ] {
        let policy = TraversalPolicy {
            sort,
            ..TraversalPolicy::recursive()
        };
        let snapshot = Snapshot::build(temp.path(), &policy).unwrap();
        assert_eq!(
            dir_names(&snapshot),
            vec!["alpha", "Beta", "Gamma"],
            "strategy {:?}",
            sort
        );
    }
}

#[test]
fn file_order_follows_strategy() {
    let temp = mixed_case_dirs();
    let build = |sort| {
        let policy = TraversalPolicy {
            sort,
            ..TraversalPolicy::default()
        };
        file_names(&Snapshot::build(temp.path(), &policy).unwrap())
    };

    assert_eq!(build(SortStrategy::Name), vec!["Zed.txt", "apple.rs"]);
    assert_eq!(build(SortStrategy::Iname), vec!["apple.rs", "Zed.txt"]);
    assert_eq!(build(SortStrategy::Type), vec!["apple.rs", "Zed.txt"]);
}

#[test]
fn mime_sort_uses_the_classifier() {
    let temp = mixed_case_dirs();
    let policy = TraversalPolicy {
        sort: SortStrategy::Mime,
        ..TraversalPolicy::default()
    };
    let snapshot = SnapshotBuilder::new(policy)
        .with_classifier(|path: &std::path::Path| {
            path.extension()
                .filter(|ext| *ext == "txt")
                .map(|_| "a/first".to_string())
        })
        .build(temp.path())
        .unwrap();

    // Unclassified files sort first under the empty-label sentinel.
    assert_eq!(file_names(&snapshot), vec!["apple.rs", "Zed.txt"]);
}

#[test]
fn levels_and_parents_are_consistent() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a/b/c")).unwrap();
    fs::write(temp.path().join("a/b/c/leaf"), "l").unwrap();

    let snapshot = Snapshot::build(temp.path(), &TraversalPolicy::recursive()).unwrap();
    assert_eq!(snapshot.len(), 5);
    for node in snapshot.iter() {
        let parent = snapshot.parent(node).unwrap();
        assert_eq!(node.level, parent.level + 1);
        assert!(node.path.starts_with(&parent.path));
    }
    let leaf = snapshot.iter().find(|n| n.name == "leaf").unwrap();
    assert_eq!(leaf.level, 4);
}

#[test]
fn bounded_depth_marks_boundaries() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a/b/c")).unwrap();

    let policy = TraversalPolicy {
        max_depth: Some(1),
        include_subdirectories: true,
        ..TraversalPolicy::default()
    };
    let snapshot = Snapshot::build(temp.path(), &policy).unwrap();
    let names: Vec<_> = snapshot.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);

    let b = snapshot.iter().find(|n| n.name == "b").unwrap();
    assert_eq!(b.as_directory().unwrap().status, ListingStatus::Boundary);
    assert_eq!(snapshot.stats().boundary, 1);
}

#[test]
fn missing_root_is_rejected() {
    let temp = TempDir::new().unwrap();
    let result = Snapshot::build(temp.path().join("nope"), &TraversalPolicy::default());
    assert!(matches!(result, Err(ldir::LdirError::InvalidRoot(_))));

    let file = temp.path().join("file");
    fs::write(&file, "f").unwrap();
    let result = Snapshot::build(&file, &TraversalPolicy::default());
    assert!(matches!(result, Err(ldir::LdirError::InvalidRoot(_))));
}
