//! Breadth-first subgraph exploration (`apoc.path.subgraphNodes` /
//! `apoc.path.subgraphAll`).
//!
//! A node is marked visited when it is enqueued, so it is enqueued at most
//! once and its level is its shortest hop distance from the start.

use std::collections::VecDeque;

use hashbrown::HashSet;
use tracing::trace;

use crate::config::TraversalConfig;
use crate::model::*;
use crate::storage::GraphReadPort;
use super::PathFinder;

/// Nodes reached by `subgraph_all` plus the relationships seen on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subgraph {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

/// Worklist entry: a node and the level it was discovered at.
struct PathState {
    node: Node,
    depth: usize,
}

impl<G: GraphReadPort> PathFinder<G> {
    /// Every node within `[min_level, max_level]` hops of `start`, in BFS
    /// order. Stops as soon as `limit` nodes have been collected.
    pub async fn subgraph_nodes(&self, start: &Node, config: &TraversalConfig) -> Vec<Node> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<PathState> = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(start.id);
        queue.push_back(PathState { node: start.clone(), depth: 0 });

        while let Some(PathState { node, depth }) = queue.pop_front() {
            if config.expands(depth) {
                for neighbor in self.neighbors_or_skip(node.id, &config.relationship_filter).await {
                    if visited.insert(neighbor.id) {
                        queue.push_back(PathState { node: neighbor, depth: depth + 1 });
                    }
                }
            }

            if config.emits(depth) {
                result.push(node);
                if config.limit_reached(result.len()) {
                    break;
                }
            }
        }

        trace!(start = %start.id, found = result.len(), "subgraph nodes");
        result
    }

    /// Like [`subgraph_nodes`](Self::subgraph_nodes), plus every relationship
    /// met while expanding a node below `max_level`.
    ///
    /// Relationships into already-visited nodes are captured too, so fan-in
    /// and cycle edges inside the subgraph are part of the result. Each
    /// relationship appears once. `limit` does not apply here.
    pub async fn subgraph_all(&self, start: &Node, config: &TraversalConfig) -> Subgraph {
        if config.max_level.is_some_and(|max| config.min_level > max) {
            return Subgraph::default();
        }

        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut recorded: HashSet<RelId> = HashSet::new();
        let mut queue: VecDeque<PathState> = VecDeque::new();
        let mut subgraph = Subgraph::default();

        visited.insert(start.id);
        queue.push_back(PathState { node: start.clone(), depth: 0 });

        while let Some(PathState { node, depth }) = queue.pop_front() {
            if config.expands(depth) {
                for rel in self.relationships_or_skip(node.id, &config.relationship_filter).await {
                    let next = rel.neighbor_of(node.id);
                    if !visited.contains(&next) {
                        let Some(neighbor) = self.resolve(next).await else { continue };
                        visited.insert(next);
                        queue.push_back(PathState { node: neighbor, depth: depth + 1 });
                    }
                    if recorded.insert(rel.id) {
                        subgraph.relationships.push(rel);
                    }
                }
            }

            if config.emits(depth) {
                subgraph.nodes.push(node);
            }
        }

        trace!(
            start = %start.id,
            nodes = subgraph.nodes.len(),
            relationships = subgraph.relationships.len(),
            "subgraph all"
        );
        subgraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryGraph;

    /// a -> b -> d, a -> c -> d
    fn diamond() -> (PathFinder<MemoryGraph>, [NodeId; 4]) {
        let g = MemoryGraph::new();
        let ids = [(); 4].map(|_| g.create_node(&["Node"], PropertyMap::new()));
        let [a, b, c, d] = ids;
        g.create_relationship(a, b, "LINK", PropertyMap::new()).unwrap();
        g.create_relationship(a, c, "LINK", PropertyMap::new()).unwrap();
        g.create_relationship(b, d, "LINK", PropertyMap::new()).unwrap();
        g.create_relationship(c, d, "LINK", PropertyMap::new()).unwrap();
        (PathFinder::new(g), ids)
    }

    #[tokio::test]
    async fn test_diamond_nodes_once_each() {
        let (finder, [a, b, c, d]) = diamond();
        let start = finder.node(a).await.unwrap();
        let nodes = finder.subgraph_nodes(&start, &TraversalConfig::default().with_max_level(2)).await;

        let ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, b, c, d]);
    }

    #[tokio::test]
    async fn test_level_zero_is_start_only() {
        let (finder, [a, ..]) = diamond();
        let start = finder.node(a).await.unwrap();
        let config = TraversalConfig::default().with_min_level(0).with_max_level(0);

        let nodes = finder.subgraph_nodes(&start, &config).await;
        assert_eq!(nodes, vec![start.clone()]);

        let all = finder.subgraph_all(&start, &config).await;
        assert_eq!(all.nodes, vec![start]);
        assert!(all.relationships.is_empty());
    }

    #[tokio::test]
    async fn test_min_level_excludes_near_nodes() {
        let (finder, [a, _, _, d]) = diamond();
        let start = finder.node(a).await.unwrap();
        let config = TraversalConfig::default().with_min_level(2).with_max_level(2);

        let nodes = finder.subgraph_nodes(&start, &config).await;
        assert_eq!(nodes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![d]);
    }

    #[tokio::test]
    async fn test_limit_stops_collection() {
        let (finder, [a, ..]) = diamond();
        let start = finder.node(a).await.unwrap();
        let nodes = finder.subgraph_nodes(&start, &TraversalConfig::default().with_limit(2)).await;
        assert_eq!(nodes.len(), 2);
    }

    #[tokio::test]
    async fn test_subgraph_all_captures_fan_in_once() {
        let (finder, [a, ..]) = diamond();
        let start = finder.node(a).await.unwrap();
        let all = finder.subgraph_all(&start, &TraversalConfig::default().with_max_level(2)).await;

        assert_eq!(all.nodes.len(), 4);
        // c -> d closes the diamond after d was discovered through b
        assert_eq!(all.relationships.len(), 4);
        let mut rel_ids: Vec<RelId> = all.relationships.iter().map(|r| r.id).collect();
        rel_ids.dedup();
        assert_eq!(rel_ids.len(), 4);
    }

    #[tokio::test]
    async fn test_contradictory_levels_yield_nothing() {
        let (finder, [a, ..]) = diamond();
        let start = finder.node(a).await.unwrap();
        let config = TraversalConfig::default().with_min_level(3).with_max_level(1);

        assert!(finder.subgraph_nodes(&start, &config).await.is_empty());
        assert_eq!(finder.subgraph_all(&start, &config).await, Subgraph::default());
    }
}
