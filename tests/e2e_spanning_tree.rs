//! End-to-end tests for spanning trees over random graphs.

use apoc_paths::{MemoryGraph, NodeId, PathFinder, PropertyMap, TraversalConfig};
use hashbrown::HashSet;
use proptest::prelude::*;

/// `n` nodes plus the given edges, endpoints taken modulo `n`.
fn build(n: usize, edges: &[(usize, usize)]) -> (PathFinder<MemoryGraph>, Vec<NodeId>) {
    let g = MemoryGraph::new();
    let ids: Vec<NodeId> = (0..n).map(|_| g.create_node(&[], PropertyMap::new())).collect();
    for &(x, y) in edges {
        g.create_relationship(ids[x % n], ids[y % n], "LINK", PropertyMap::new()).unwrap();
    }
    (PathFinder::new(g), ids)
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

proptest! {
    #[test]
    fn prop_one_path_per_reachable_node(
        n in 1usize..8,
        edges in prop::collection::vec((0usize..8, 0usize..8), 0..16),
    ) {
        let (finder, ids) = build(n, &edges);
        let (tree, reached) = runtime().block_on(async {
            let start = finder.node(ids[0]).await.unwrap();
            let config = TraversalConfig::default();
            let tree = finder.spanning_tree(&start, &config).await;
            let reached = finder.subgraph_nodes(&start, &config).await;
            (tree, reached)
        });

        // The start node is reached but has no path of its own.
        prop_assert_eq!(tree.len(), reached.len() - 1);

        let ends: HashSet<NodeId> = tree.iter().filter_map(|p| p.end().map(|n| n.id)).collect();
        prop_assert_eq!(ends.len(), tree.len());
        prop_assert!(!ends.contains(&ids[0]));
        prop_assert!(tree.iter().all(|p| p.start().map(|n| n.id) == Some(ids[0])));
    }

    #[test]
    fn prop_tree_paths_are_shortest(
        n in 2usize..7,
        edges in prop::collection::vec((0usize..7, 0usize..7), 1..12),
    ) {
        let (finder, ids) = build(n, &edges);
        let checks = runtime().block_on(async {
            let start = finder.node(ids[0]).await.unwrap();
            let mut checks = Vec::new();
            for path in finder.spanning_tree(&start, &TraversalConfig::default()).await {
                let Some(end) = path.end().cloned() else { continue };
                let distance = finder.distance(&start, &end, "").await;
                checks.push((path.len(), distance));
            }
            checks
        });

        for (len, distance) in checks {
            prop_assert_eq!(Some(len), distance);
        }
    }
}

#[tokio::test]
async fn test_isolated_start_has_empty_tree() {
    let (finder, ids) = build(3, &[(1, 2)]);
    let start = finder.node(ids[0]).await.unwrap();
    assert!(finder.spanning_tree(&start, &TraversalConfig::default()).await.is_empty());
}
