//! Hop-distance neighborhoods (`apoc.neighbors.*`).

use hashbrown::HashSet;

use crate::model::*;
use crate::storage::GraphReadPort;
use super::PathFinder;

impl<G: GraphReadPort> PathFinder<G> {
    /// Nodes whose shortest hop distance from `node` is exactly `hops`.
    /// `hops == 0` yields `node` itself.
    pub async fn neighbors_at_hop(&self, node: &Node, rel_filter: &str, hops: usize) -> Vec<Node> {
        self.hop_levels(node, rel_filter, hops).await
            .into_iter()
            .nth(hops)
            .unwrap_or_default()
    }

    /// Nodes within `1..=max_hops` hops of `node`, nearest levels first.
    pub async fn neighbors_to_hop(&self, node: &Node, rel_filter: &str, max_hops: usize) -> Vec<Node> {
        self.hop_levels(node, rel_filter, max_hops).await
            .into_iter()
            .skip(1)
            .flatten()
            .collect()
    }

    /// Number of nodes exactly `hops` away.
    pub async fn count_neighbors(&self, node: &Node, rel_filter: &str, hops: usize) -> usize {
        self.neighbors_at_hop(node, rel_filter, hops).await.len()
    }

    /// Whether anything sits exactly `hops` away.
    pub async fn neighbors_exist(&self, node: &Node, rel_filter: &str, hops: usize) -> bool {
        self.count_neighbors(node, rel_filter, hops).await > 0
    }

    /// Nodes within `max_depth` hops in depth-first pre-order, `node` first.
    ///
    /// A node is claimed by the first branch that reaches it, so its depth
    /// here is not necessarily its shortest distance.
    pub async fn neighbors_dfs(&self, node: &Node, rel_filter: &str, max_depth: usize) -> Vec<Node> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![(node.clone(), 0usize)];

        while let Some((current, depth)) = stack.pop() {
            if !visited.insert(current.id) {
                continue;
            }
            if depth < max_depth {
                let neighbors = self.neighbors_or_skip(current.id, rel_filter).await;
                // reversed so the first neighbor is popped first
                stack.extend(neighbors.into_iter().rev().map(|n| (n, depth + 1)));
            }
            order.push(current);
        }

        order
    }

    /// BFS levels `0..=max_hops`; stops early once a level comes up empty.
    async fn hop_levels(&self, node: &Node, rel_filter: &str, max_hops: usize) -> Vec<Vec<Node>> {
        let mut visited: HashSet<NodeId> = HashSet::from([node.id]);
        let mut levels = vec![vec![node.clone()]];

        while levels.len() <= max_hops {
            let frontier: Vec<NodeId> = levels.last()
                .map(|level| level.iter().map(|n| n.id).collect())
                .unwrap_or_default();

            let mut next = Vec::new();
            for id in frontier {
                for neighbor in self.neighbors_or_skip(id, rel_filter).await {
                    if visited.insert(neighbor.id) {
                        next.push(neighbor);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            levels.push(next);
        }

        levels
    }
}
