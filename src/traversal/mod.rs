//! # Traversal Engine
//!
//! `PathFinder` wraps a `GraphReadPort` and answers traversal queries over
//! it. Each method is one self-contained traversal: visited sets, queues and
//! stacks are created on entry and dropped on return, so a single finder can
//! serve concurrent callers as long as the port tolerates concurrent reads.
//!
//! | Module | Procedures |
//! |--------|------------|
//! | `subgraph` | `subgraph_nodes`, `subgraph_all` |
//! | `expand` | `expand_config`, `expand` |
//! | `spanning` | `spanning_tree` |
//! | `shortest` | `shortest_path`, `all_shortest_paths` |
//! | `search` | `all_paths`, `longest_paths`, `k_shortest_paths`, `cycles`, ... |
//! | `neighbors` | `neighbors_at_hop`, `neighbors_to_hop`, `neighbors_dfs`, `count_neighbors` |
//!
//! Failed reads never abort a traversal. A node or relationship the port
//! cannot return is skipped and logged at `debug` level.

pub mod subgraph;
pub mod expand;
pub mod spanning;
pub mod shortest;
pub mod search;
pub mod neighbors;

use tracing::debug;

use crate::model::*;
use crate::storage::GraphReadPort;
use crate::Result;

pub use subgraph::Subgraph;

/// Traversal entry point over a read port.
pub struct PathFinder<G: GraphReadPort> {
    graph: G,
}

impl<G: GraphReadPort> PathFinder<G> {
    /// Create a finder reading through the given port.
    pub fn new(graph: G) -> Self {
        Self { graph }
    }

    /// Access the underlying port.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Look up a start node. Unlike the traversal methods this surfaces the
    /// port error, since there is nothing to skip to.
    pub async fn node(&self, id: NodeId) -> Result<Node> {
        self.graph.get_node(id).await
    }

    // ========================================================================
    // Skip-on-failure reads shared by every traversal
    // ========================================================================

    async fn resolve(&self, id: NodeId) -> Option<Node> {
        match self.graph.get_node(id).await {
            Ok(node) => Some(node),
            Err(err) => {
                debug!(node = %id, error = %err, "skipping unresolvable node");
                None
            }
        }
    }

    async fn relationships_or_skip(&self, id: NodeId, rel_filter: &str) -> Vec<Relationship> {
        match self.graph.get_node_relationships(id, rel_filter, Direction::Both).await {
            Ok(rels) => rels,
            Err(err) => {
                debug!(node = %id, error = %err, "skipping expansion, relationships unavailable");
                Vec::new()
            }
        }
    }

    async fn neighbors_or_skip(&self, id: NodeId, rel_filter: &str) -> Vec<Node> {
        match self.graph.get_node_neighbors(id, rel_filter, Direction::Both).await {
            Ok(nodes) => nodes,
            Err(err) => {
                debug!(node = %id, error = %err, "skipping expansion, neighbors unavailable");
                Vec::new()
            }
        }
    }

    async fn paths_or_empty(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        max_hops: usize,
    ) -> Vec<Path> {
        match self.graph.find_all_paths(start.id, end.id, rel_filter, max_hops).await {
            Ok(paths) => paths,
            Err(err) => {
                debug!(start = %start.id, end = %end.id, error = %err, "path search failed");
                Vec::new()
            }
        }
    }
}
