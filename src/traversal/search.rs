//! Path search between two nodes (`apoc.paths.*`).
//!
//! Thin filters over `find_all_paths`. A failing port reads as "no paths".

use hashbrown::HashSet;

use crate::algebra::{is_elementary, is_simple};
use crate::config::TraversalConfig;
use crate::model::*;
use crate::storage::GraphReadPort;
use super::PathFinder;

/// Search bound used by [`PathFinder::distance`].
pub const DISTANCE_SEARCH_HOPS: usize = 100;

/// `path` leaves `start`, comes back to it, and repeats no other node.
fn closes_cycle(path: &Path, start: NodeId) -> bool {
    let Some((last, rest)) = path.nodes.split_last() else { return false };
    let mut seen: HashSet<NodeId> = HashSet::new();
    !path.is_empty() && last.id == start && rest.iter().all(|n| seen.insert(n.id))
}

impl<G: GraphReadPort> PathFinder<G> {
    /// Every path the port finds within `max_len` hops.
    pub async fn all_paths(&self, start: &Node, end: &Node, rel_filter: &str, max_len: usize) -> Vec<Path> {
        self.paths_or_empty(start, end, rel_filter, max_len).await
    }

    /// Paths of maximum length.
    pub async fn longest_paths(&self, start: &Node, end: &Node, rel_filter: &str, max_len: usize) -> Vec<Path> {
        let mut paths = self.all_paths(start, end, rel_filter, max_len).await;
        if let Some(max) = paths.iter().map(Path::len).max() {
            paths.retain(|p| p.len() == max);
        }
        paths
    }

    /// Paths with no repeated node.
    pub async fn simple_paths(&self, start: &Node, end: &Node, rel_filter: &str, max_len: usize) -> Vec<Path> {
        let mut paths = self.all_paths(start, end, rel_filter, max_len).await;
        paths.retain(is_simple);
        paths
    }

    /// Paths with no repeated relationship.
    pub async fn elementary_paths(&self, start: &Node, end: &Node, rel_filter: &str, max_len: usize) -> Vec<Path> {
        let mut paths = self.all_paths(start, end, rel_filter, max_len).await;
        paths.retain(is_elementary);
        paths
    }

    /// Up to `count` paths sharing no interior node, picked greedily in the
    /// order the port returns them. The endpoints are shared by all.
    pub async fn disjoint_paths(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        max_len: usize,
        count: usize,
    ) -> Vec<Path> {
        let endpoints = [start.id, end.id];
        let mut used: HashSet<NodeId> = HashSet::new();
        let mut picked = Vec::new();

        for path in self.all_paths(start, end, rel_filter, max_len).await {
            if picked.len() >= count {
                break;
            }
            let interior = || path.nodes.iter().map(|n| n.id).filter(|id| !endpoints.contains(id));
            if interior().any(|id| used.contains(&id)) {
                continue;
            }
            used.extend(interior());
            picked.push(path);
        }
        picked
    }

    /// Up to `count` paths sharing no relationship, picked greedily.
    pub async fn edge_disjoint_paths(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        max_len: usize,
        count: usize,
    ) -> Vec<Path> {
        let mut used: HashSet<RelId> = HashSet::new();
        let mut picked = Vec::new();

        for path in self.all_paths(start, end, rel_filter, max_len).await {
            if picked.len() >= count {
                break;
            }
            if path.relationships.iter().any(|r| used.contains(&r.id)) {
                continue;
            }
            used.extend(path.relationships.iter().map(|r| r.id));
            picked.push(path);
        }
        picked
    }

    /// The `k` shortest paths, shortest first. Ties keep port order.
    pub async fn k_shortest_paths(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        max_len: usize,
        k: usize,
    ) -> Vec<Path> {
        let mut paths = self.all_paths(start, end, rel_filter, max_len).await;
        paths.sort_by_key(Path::len);
        paths.truncate(k);
        paths
    }

    /// Paths of exactly `length` hops.
    pub async fn paths_with_length(&self, start: &Node, end: &Node, rel_filter: &str, length: usize) -> Vec<Path> {
        let mut paths = self.all_paths(start, end, rel_filter, length).await;
        paths.retain(|p| p.len() == length);
        paths
    }

    /// Paths between `min_len` and `max_len` hops, inclusive.
    pub async fn paths_within_length(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        min_len: usize,
        max_len: usize,
    ) -> Vec<Path> {
        let mut paths = self.all_paths(start, end, rel_filter, max_len).await;
        paths.retain(|p| (min_len..=max_len).contains(&p.len()));
        paths
    }

    pub async fn count_paths(&self, start: &Node, end: &Node, rel_filter: &str, max_len: usize) -> usize {
        self.all_paths(start, end, rel_filter, max_len).await.len()
    }

    pub async fn path_exists(&self, start: &Node, end: &Node, rel_filter: &str, max_len: usize) -> bool {
        self.shortest_path(start, end, rel_filter, max_len).await.is_some()
    }

    /// Cycles through `start` of at most `max_len` hops.
    ///
    /// Walks come from the path expander, so a cycle read in both directions
    /// is reported once per direction. A self-loop is a cycle of length 1.
    pub async fn cycles(&self, start: &Node, rel_filter: &str, max_len: usize) -> Vec<Path> {
        let config = TraversalConfig::default()
            .with_relationship_filter(rel_filter)
            .with_min_level(1)
            .with_max_level(max_len);
        let mut walks = self.expand_config(start, &config).await;
        walks.retain(|p| closes_cycle(p, start.id));
        walks
    }

    /// Simple paths from `start` to `end` that visit exactly as many nodes
    /// as `nodes` holds. An empty `nodes` yields nothing.
    pub async fn hamiltonian_paths(
        &self,
        nodes: &[Node],
        start: &Node,
        end: &Node,
        rel_filter: &str,
    ) -> Vec<Path> {
        if nodes.is_empty() {
            return Vec::new();
        }
        let mut paths = self.all_paths(start, end, rel_filter, nodes.len()).await;
        paths.retain(|p| p.node_count() == nodes.len() && is_simple(p));
        paths
    }

    /// Hop distance within [`DISTANCE_SEARCH_HOPS`], `None` if unreachable.
    pub async fn distance(&self, start: &Node, end: &Node, rel_filter: &str) -> Option<usize> {
        self.shortest_path(start, end, rel_filter, DISTANCE_SEARCH_HOPS).await
            .map(|p| p.len())
    }
}
