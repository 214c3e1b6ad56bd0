//! End-to-end tests for subgraph exploration.
//!
//! Builds small graphs through `MemoryGraph` and checks `subgraph_nodes` /
//! `subgraph_all` through the public `PathFinder` API.

use apoc_paths::{MemoryGraph, NodeId, PathFinder, PropertyMap, TraversalConfig, Value};
use pretty_assertions::assert_eq;

// ============================================================================
// Helper: diamond A -> B -> D, A -> C -> D
// ============================================================================

fn person(g: &MemoryGraph, name: &str) -> NodeId {
    g.create_node(&["Person"], PropertyMap::from([("name".to_owned(), Value::from(name))]))
}

fn setup_diamond() -> (PathFinder<MemoryGraph>, [NodeId; 4]) {
    let g = MemoryGraph::new();
    let a = person(&g, "A");
    let b = person(&g, "B");
    let c = person(&g, "C");
    let d = person(&g, "D");
    g.create_relationship(a, b, "KNOWS", PropertyMap::new()).unwrap();
    g.create_relationship(a, c, "KNOWS", PropertyMap::new()).unwrap();
    g.create_relationship(b, d, "KNOWS", PropertyMap::new()).unwrap();
    g.create_relationship(c, d, "KNOWS", PropertyMap::new()).unwrap();
    (PathFinder::new(g), [a, b, c, d])
}

fn names(nodes: &[apoc_paths::Node]) -> Vec<String> {
    nodes.iter()
        .filter_map(|n| n.get("name").and_then(Value::as_str).map(str::to_owned))
        .collect()
}

// ============================================================================
// 1. Every reachable node exactly once, in BFS order
// ============================================================================

#[tokio::test]
async fn test_diamond_reaches_each_node_once() {
    let (finder, [a, ..]) = setup_diamond();
    let start = finder.node(a).await.unwrap();

    let config = TraversalConfig::default().with_max_level(2);
    let nodes = finder.subgraph_nodes(&start, &config).await;

    assert_eq!(names(&nodes), vec!["A", "B", "C", "D"]);
}

#[tokio::test]
async fn test_level_window() {
    let (finder, [a, ..]) = setup_diamond();
    let start = finder.node(a).await.unwrap();

    let only_start = TraversalConfig::default().with_min_level(0).with_max_level(0);
    assert_eq!(names(&finder.subgraph_nodes(&start, &only_start).await), vec!["A"]);

    let second_ring = TraversalConfig::default().with_min_level(2).with_max_level(2);
    assert_eq!(names(&finder.subgraph_nodes(&start, &second_ring).await), vec!["D"]);
}

#[tokio::test]
async fn test_unbounded_config_from_json() {
    let (finder, [a, ..]) = setup_diamond();
    let start = finder.node(a).await.unwrap();

    let config = TraversalConfig::from_json(serde_json::json!({
        "maxLevel": -1,
        "relationshipFilter": "KNOWS>",
    })).unwrap();
    assert_eq!(finder.subgraph_nodes(&start, &config).await.len(), 4);
}

// ============================================================================
// 2. subgraph_all carries the relationships
// ============================================================================

#[tokio::test]
async fn test_subgraph_all_keeps_fan_in_edges() {
    let (finder, [a, ..]) = setup_diamond();
    let start = finder.node(a).await.unwrap();

    let sub = finder.subgraph_all(&start, &TraversalConfig::default()).await;
    assert_eq!(sub.nodes.len(), 4);
    assert_eq!(sub.relationships.len(), 4);
}

#[tokio::test]
async fn test_subgraph_all_stops_at_max_level() {
    let (finder, [a, ..]) = setup_diamond();
    let start = finder.node(a).await.unwrap();

    let sub = finder.subgraph_all(&start, &TraversalConfig::default().with_max_level(1)).await;
    assert_eq!(names(&sub.nodes), vec!["A", "B", "C"]);
    assert_eq!(sub.relationships.len(), 2);
}
