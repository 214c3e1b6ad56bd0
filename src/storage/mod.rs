//! # Graph Read Port
//!
//! The contract between the traversal engine and whatever stores the graph.
//! The engine only ever reads through it; it never mutates the graph.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryGraph` | `memory` | In-memory adjacency lists for testing/embedding |
//!
//! Every method may fail with `Error::NotFound` or a backend-specific
//! `Error::StorageError`. The engine treats a failed read as "skip this
//! node or edge" and keeps walking.

pub mod filter;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use crate::model::*;
use crate::Result;

pub use filter::RelationshipFilter;
pub use memory::MemoryGraph;

// ============================================================================
// GraphReadPort Trait
// ============================================================================

/// Read-only graph capability consumed by the traversal engine.
///
/// `rel_filter` is passed through untouched from the caller's configuration.
/// Backends decide how to interpret it; `MemoryGraph` understands the
/// APOC syntax parsed by [`RelationshipFilter`].
#[async_trait]
pub trait GraphReadPort: Send + Sync + 'static {
    /// Get a node by ID.
    async fn get_node(&self, id: NodeId) -> Result<Node>;

    /// Distinct nodes adjacent to `id` through relationships that pass the
    /// filter and direction.
    async fn get_node_neighbors(
        &self,
        id: NodeId,
        rel_filter: &str,
        dir: Direction,
    ) -> Result<Vec<Node>>;

    /// Relationships attached to `id` that pass the filter and direction.
    async fn get_node_relationships(
        &self,
        id: NodeId,
        rel_filter: &str,
        dir: Direction,
    ) -> Result<Vec<Relationship>>;

    /// One shortest path between two nodes, at most `max_hops` long.
    async fn find_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
        rel_filter: &str,
        max_hops: usize,
    ) -> Result<Path>;

    /// Every path between two nodes, at most `max_hops` long.
    async fn find_all_paths(
        &self,
        start: NodeId,
        end: NodeId,
        rel_filter: &str,
        max_hops: usize,
    ) -> Result<Vec<Path>>;
}

/// Shared ports read through the same backend.
#[async_trait]
impl<G: GraphReadPort + ?Sized> GraphReadPort for Arc<G> {
    async fn get_node(&self, id: NodeId) -> Result<Node> {
        (**self).get_node(id).await
    }

    async fn get_node_neighbors(
        &self,
        id: NodeId,
        rel_filter: &str,
        dir: Direction,
    ) -> Result<Vec<Node>> {
        (**self).get_node_neighbors(id, rel_filter, dir).await
    }

    async fn get_node_relationships(
        &self,
        id: NodeId,
        rel_filter: &str,
        dir: Direction,
    ) -> Result<Vec<Relationship>> {
        (**self).get_node_relationships(id, rel_filter, dir).await
    }

    async fn find_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
        rel_filter: &str,
        max_hops: usize,
    ) -> Result<Path> {
        (**self).find_shortest_path(start, end, rel_filter, max_hops).await
    }

    async fn find_all_paths(
        &self,
        start: NodeId,
        end: NodeId,
        rel_filter: &str,
        max_hops: usize,
    ) -> Result<Vec<Path>> {
        (**self).find_all_paths(start, end, rel_filter, max_hops).await
    }
}
