//! Spanning trees (`apoc.path.spanningTree`).

use std::collections::VecDeque;

use hashbrown::HashSet;
use tracing::trace;

use crate::config::TraversalConfig;
use crate::model::*;
use crate::storage::GraphReadPort;
use super::PathFinder;

impl<G: GraphReadPort> PathFinder<G> {
    /// One path per node reachable from `start` within `max_level` hops.
    ///
    /// Breadth-first over distinct nodes: a node is visited for good the
    /// first time it is discovered, and that discovery is its only path.
    /// The zero-length path to `start` is not emitted and `min_level` is
    /// ignored. A non-zero `limit` caps the number of paths.
    pub async fn spanning_tree(&self, start: &Node, config: &TraversalConfig) -> Vec<Path> {
        let filter = config.relationship_filter.as_str();
        let mut visited: HashSet<NodeId> = HashSet::from([start.id]);
        let mut tree = Vec::new();
        let mut queue = VecDeque::from([Path::single(start.clone())]);

        'walk: while let Some(path) = queue.pop_front() {
            if !config.expands(path.len()) {
                continue;
            }
            let Some(current) = path.end().map(|n| n.id) else { continue };

            for rel in self.relationships_or_skip(current, filter).await {
                let next = rel.neighbor_of(current);
                if visited.contains(&next) {
                    continue;
                }
                let Some(node) = self.resolve(next).await else { continue };
                visited.insert(next);

                let branch = path.extended(rel, node);
                tree.push(branch.clone());
                if config.limit_reached(tree.len()) {
                    break 'walk;
                }
                queue.push_back(branch);
            }
        }

        trace!(start = %start.id, found = tree.len(), "spanning tree");
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryGraph;

    /// root with children x, y; both children link to z.
    fn fan_in() -> (PathFinder<MemoryGraph>, [NodeId; 4]) {
        let g = MemoryGraph::new();
        let ids = [(); 4].map(|_| g.create_node(&[], PropertyMap::new()));
        let [root, x, y, z] = ids;
        g.create_relationship(root, x, "CHILD", PropertyMap::new()).unwrap();
        g.create_relationship(root, y, "CHILD", PropertyMap::new()).unwrap();
        g.create_relationship(x, z, "CHILD", PropertyMap::new()).unwrap();
        g.create_relationship(y, z, "CHILD", PropertyMap::new()).unwrap();
        (PathFinder::new(g), ids)
    }

    #[tokio::test]
    async fn test_one_path_per_node() {
        let (finder, [root, x, y, z]) = fan_in();
        let start = finder.node(root).await.unwrap();
        let tree = finder.spanning_tree(&start, &TraversalConfig::default()).await;

        let ends: Vec<NodeId> = tree.iter().filter_map(|p| p.end().map(|n| n.id)).collect();
        assert_eq!(ends, vec![x, y, z]);
        assert_eq!(tree[2].len(), 2);
        assert!(tree.iter().all(|p| p.start().map(|n| n.id) == Some(root)));
    }

    #[tokio::test]
    async fn test_max_level_bounds_tree() {
        let (finder, [root, ..]) = fan_in();
        let start = finder.node(root).await.unwrap();
        let tree = finder.spanning_tree(&start, &TraversalConfig::default().with_max_level(1)).await;
        assert_eq!(tree.len(), 2);

        let none = finder.spanning_tree(&start, &TraversalConfig::default().with_max_level(0)).await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_limit_caps_tree() {
        let (finder, [root, ..]) = fan_in();
        let start = finder.node(root).await.unwrap();
        let tree = finder.spanning_tree(&start, &TraversalConfig::default().with_limit(1)).await;
        assert_eq!(tree.len(), 1);
    }
}
