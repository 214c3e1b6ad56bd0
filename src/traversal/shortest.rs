//! Shortest paths (`apoc.path.shortestPath` / `apoc.path.allShortestPaths`).
//!
//! The engine does not search here itself. It delegates to the port's path
//! primitives and post-filters what comes back.

use tracing::{debug, trace};

use crate::model::*;
use crate::storage::GraphReadPort;
use super::PathFinder;

/// Keep only the paths of minimum length.
pub(crate) fn shortest_only(mut paths: Vec<Path>) -> Vec<Path> {
    let Some(min) = paths.iter().map(Path::len).min() else { return paths };
    paths.retain(|p| p.len() == min);
    paths
}

impl<G: GraphReadPort> PathFinder<G> {
    /// One shortest path of at most `max_hops`, or `None` when the port finds
    /// none or fails.
    pub async fn shortest_path(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        max_hops: usize,
    ) -> Option<Path> {
        match self.graph.find_shortest_path(start.id, end.id, rel_filter, max_hops).await {
            Ok(path) => Some(path),
            Err(err) => {
                debug!(start = %start.id, end = %end.id, error = %err, "no shortest path");
                None
            }
        }
    }

    /// Every path of minimum length among the paths the port returns.
    /// Empty when there are none.
    pub async fn all_shortest_paths(
        &self,
        start: &Node,
        end: &Node,
        rel_filter: &str,
        max_hops: usize,
    ) -> Vec<Path> {
        let paths = shortest_only(self.paths_or_empty(start, end, rel_filter, max_hops).await);
        trace!(start = %start.id, end = %end.id, found = paths.len(), "all shortest paths");
        paths
    }
}
