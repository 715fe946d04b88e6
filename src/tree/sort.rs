//! Ordering of directory children

use crate::tree::classify::Classifier;
use crate::tree::node::SnapshotNode;
use crate::tree::policy::SortStrategy;
use crate::types::NodeId;

/// Sort a directory's files in place by the selected strategy
///
/// All strategies are stable, so entries with equal keys keep their listing
/// order. `mime` classifies each file once.
pub(crate) fn sort_files(
    nodes: &[SnapshotNode],
    files: &mut [NodeId],
    strategy: SortStrategy,
    classifier: &dyn Classifier,
) {
    match strategy {
        SortStrategy::None => {}
        SortStrategy::Name => files.sort_by(|a, b| nodes[*a].name.cmp(&nodes[*b].name)),
        SortStrategy::Iname => files.sort_by_cached_key(|id| folded_name(&nodes[*id])),
        SortStrategy::Type => files.sort_by_cached_key(|id| {
            let node = &nodes[*id];
            let extension = node
                .as_file()
                .map(|f| f.extension.clone())
                .unwrap_or_default();
            (extension, folded_name(node))
        }),
        SortStrategy::Mime => files.sort_by_cached_key(|id| {
            let node = &nodes[*id];
            let label = match classifier.classify(&node.path) {
                Some(label) => label,
                None => {
                    tracing::debug!(path = %node.path.display(), "Classification failed");
                    String::new()
                }
            };
            (label, folded_name(node))
        }),
    }
}

/// Sort subdirectories: case-insensitive by name for every strategy but `none`
pub(crate) fn sort_directories(
    nodes: &[SnapshotNode],
    directories: &mut [NodeId],
    strategy: SortStrategy,
) {
    if strategy != SortStrategy::None {
        directories.sort_by_cached_key(|id| folded_name(&nodes[*id]));
    }
}

fn folded_name(node: &SnapshotNode) -> String {
    node.name.to_lowercase()
}
