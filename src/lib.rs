//! # apoc-paths: path finding over a property graph
//!
//! Traversal procedures in the spirit of `apoc.path.*`, `apoc.paths.*` and
//! `apoc.neighbors.*`, written against an abstract read port instead of a
//! concrete database.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphReadPort` is the contract between the engine and storage
//! 2. **Clean DTOs**: `Node`, `Relationship`, `Path`, `Value` cross all boundaries
//! 3. **Per-call state**: visited sets and queues never outlive one traversal
//! 4. **Absence is not failure**: unreachable targets come back as empty results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apoc_paths::{MemoryGraph, PathFinder, PropertyMap, TraversalConfig};
//!
//! # async fn example() -> apoc_paths::Result<()> {
//! let graph = MemoryGraph::new();
//! let a = graph.create_node(&["Person"], PropertyMap::new());
//! let b = graph.create_node(&["Person"], PropertyMap::new());
//! graph.create_relationship(a, b, "KNOWS", PropertyMap::new())?;
//!
//! let finder = PathFinder::new(graph);
//! let start = finder.node(a).await?;
//! let config = TraversalConfig::default().with_max_level(2);
//! for path in finder.expand_config(&start, &config).await {
//!     println!("{} hops", path.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Operations
//!
//! | Family | Methods |
//! |--------|---------|
//! | Subgraph | `subgraph_nodes`, `subgraph_all` |
//! | Expansion | `expand_config`, `expand`, `spanning_tree` |
//! | Shortest | `shortest_path`, `all_shortest_paths` |
//! | Search | `all_paths`, `k_shortest_paths`, `disjoint_paths`, `cycles`, ... |
//! | Neighbors | `neighbors_at_hop`, `neighbors_to_hop`, `neighbors_dfs`, ... |
//! | Algebra | `algebra::{combine, elements, slice, reverse}` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod storage;
pub mod traversal;
pub mod algebra;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    Node, Relationship, Path, PathElement, Value, PropertyMap,
    NodeId, RelId, Direction,
};

pub use config::{TraversalConfig, Uniqueness};

pub use storage::{GraphReadPort, MemoryGraph, RelationshipFilter};

pub use traversal::{PathFinder, Subgraph};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
