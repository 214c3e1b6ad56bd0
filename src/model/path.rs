//! Paths: alternating nodes and relationships.

use serde::{Deserialize, Serialize};
use super::{Node, NodeId, RelId, Relationship, Value};

/// A path in the graph: node -[rel]- node -[rel]- node ...
///
/// `relationships[i]` connects `nodes[i]` and `nodes[i + 1]` in either
/// direction. A non-empty path always has one more node than relationships.
/// The empty path (no nodes at all) only comes out of degenerate algebra,
/// e.g. combining zero paths or slicing an empty range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

impl Path {
    /// The path with no nodes and no relationships.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Zero-length path sitting on one node.
    pub fn single(node: Node) -> Self {
        Self { nodes: vec![node], relationships: Vec::new() }
    }

    /// Hop count: the number of relationships.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// True when the path has no relationships (zero hops).
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn start(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn contains_relationship(&self, id: RelId) -> bool {
        self.relationships.iter().any(|r| r.id == id)
    }

    /// Extend path with a relationship and the node it leads to.
    pub fn append(&mut self, rel: Relationship, node: Node) {
        self.relationships.push(rel);
        self.nodes.push(node);
    }

    /// Copy of this path extended by one hop.
    pub fn extended(&self, rel: Relationship, node: Node) -> Self {
        let mut next = self.clone();
        next.append(rel, node);
        next
    }

    /// Drop the last hop. No-op on zero-length paths.
    pub(crate) fn pop(&mut self) -> Option<(Relationship, Node)> {
        if self.relationships.is_empty() {
            return None;
        }
        let rel = self.relationships.pop()?;
        let node = self.nodes.pop()?;
        Some((rel, node))
    }
}

/// One entry of a flattened path: `[node, rel, node, rel, ..., node]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    Node(Node),
    Relationship(Relationship),
}

impl PathElement {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            PathElement::Node(n) => Some(n),
            PathElement::Relationship(_) => None,
        }
    }

    pub fn as_relationship(&self) -> Option<&Relationship> {
        match self {
            PathElement::Relationship(r) => Some(r),
            PathElement::Node(_) => None,
        }
    }
}

impl From<PathElement> for Value {
    fn from(element: PathElement) -> Self {
        match element {
            PathElement::Node(n) => Value::Node(Box::new(n)),
            PathElement::Relationship(r) => Value::Relationship(Box::new(r)),
        }
    }
}

impl From<Path> for Value {
    fn from(path: Path) -> Self {
        Value::Path(Box::new(path))
    }
}
