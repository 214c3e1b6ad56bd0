//! Relationship (edge) in the property graph.

use serde::{Deserialize, Serialize};
use super::{NodeId, PropertyMap};

/// Opaque relationship identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which relationships of a node a read should return, relative to that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    #[default]
    Both,
}

impl Direction {
    /// Whether a relationship `src -> dst` is admitted when read from `node`.
    pub fn admits(self, node: NodeId, rel: &Relationship) -> bool {
        match self {
            Direction::Outgoing => rel.src == node,
            Direction::Incoming => rel.dst == node,
            Direction::Both => rel.src == node || rel.dst == node,
        }
    }
}

/// A directed relationship. "Both directions" is a read option, never a
/// property of the relationship itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelId,
    pub src: NodeId,
    pub dst: NodeId,
    pub rel_type: String,
    pub properties: PropertyMap,
}

impl Relationship {
    pub fn new(id: RelId, src: NodeId, dst: NodeId, rel_type: impl Into<String>) -> Self {
        Self {
            id,
            src,
            dst,
            rel_type: rel_type.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Neighbor reached when walking this relationship away from `current`.
    ///
    /// Start-node match wins, anything else walks back to the start node.
    /// Self-loops therefore lead back to `current`.
    pub fn neighbor_of(&self, current: NodeId) -> NodeId {
        if self.src == current { self.dst } else { self.src }
    }
}
