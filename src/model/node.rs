//! Graph vertices as the read port hands them out.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// Port-assigned vertex id. Visited sets and path membership checks key on
/// this, never on node contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a vertex taken at read time.
///
/// Traversals copy these into the paths they emit; two reads of the same id
/// compare equal as long as the graph was not written in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub labels: Vec<String>,
    pub properties: PropertyMap,
}

impl Node {
    /// Bare node with no labels or properties, mostly for hand-built paths.
    pub fn new(id: NodeId) -> Self {
        Self { id, labels: Vec::new(), properties: PropertyMap::new() }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Property lookup; `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
