//! In-memory graph read port.
//!
//! The reference implementation of `GraphReadPort`. Simple HashMaps
//! protected by RwLock, plus a small write API for building graphs.
//!
//! ## Limitations
//!
//! - **No transactions**: writes are applied immediately.
//! - **No indexes**: only per-node adjacency lists are maintained.
//! - **Path search is exhaustive**: `find_all_paths` enumerates every simple
//!   path up to `max_hops`, which grows quickly on dense graphs.
//!
//! Use this backend for:
//! - Testing the traversal engine
//! - Embedding the engine where the graph already lives in memory

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use hashbrown::HashSet;
use parking_lot::RwLock;

use crate::model::*;
use crate::{Error, Result};
use super::{GraphReadPort, RelationshipFilter};

// ============================================================================
// MemoryGraph
// ============================================================================

/// In-memory property graph. Cloning shares the underlying storage.
#[derive(Clone)]
pub struct MemoryGraph {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    nodes: RwLock<HashMap<NodeId, Node>>,
    relationships: RwLock<HashMap<RelId, Relationship>>,
    /// node_id → relationship IDs in creation order
    adjacency: RwLock<HashMap<NodeId, Vec<RelId>>>,
    next_node_id: AtomicU64,
    next_rel_id: AtomicU64,
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                nodes: RwLock::new(HashMap::new()),
                relationships: RwLock::new(HashMap::new()),
                adjacency: RwLock::new(HashMap::new()),
                next_node_id: AtomicU64::new(1),
                next_rel_id: AtomicU64::new(1),
            }),
        }
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Create a node with the given labels and properties.
    pub fn create_node(&self, labels: &[&str], props: PropertyMap) -> NodeId {
        let id = NodeId(self.inner.next_node_id.fetch_add(1, Ordering::Relaxed));
        let mut node = Node::new(id).with_labels(labels.iter().copied());
        node.properties = props;
        self.inner.nodes.write().insert(id, node);
        self.inner.adjacency.write().insert(id, Vec::new());
        id
    }

    /// Create a relationship between two existing nodes.
    pub fn create_relationship(
        &self,
        src: NodeId,
        dst: NodeId,
        rel_type: &str,
        props: PropertyMap,
    ) -> Result<RelId> {
        {
            let nodes = self.inner.nodes.read();
            if !nodes.contains_key(&src) {
                return Err(Error::NotFound(format!("Source node {src}")));
            }
            if !nodes.contains_key(&dst) {
                return Err(Error::NotFound(format!("Target node {dst}")));
            }
        }

        let id = RelId(self.inner.next_rel_id.fetch_add(1, Ordering::Relaxed));
        let rel = Relationship {
            id,
            src,
            dst,
            rel_type: rel_type.to_string(),
            properties: props,
        };
        self.inner.relationships.write().insert(id, rel);

        let mut adj = self.inner.adjacency.write();
        adj.entry(src).or_default().push(id);
        if src != dst {
            adj.entry(dst).or_default().push(id);
        }

        Ok(id)
    }

    /// Delete a relationship. Returns true if it existed.
    pub fn delete_relationship(&self, id: RelId) -> bool {
        let removed = self.inner.relationships.write().remove(&id);
        if let Some(rel) = &removed {
            let mut adj = self.inner.adjacency.write();
            for end in [rel.src, rel.dst] {
                if let Some(rels) = adj.get_mut(&end) {
                    rels.retain(|rid| *rid != id);
                }
            }
        }
        removed.is_some()
    }

    pub fn node_count(&self) -> usize {
        self.inner.nodes.read().len()
    }

    pub fn relationship_count(&self) -> usize {
        self.inner.relationships.read().len()
    }

    // ========================================================================
    // Reads (synchronous core behind the port)
    // ========================================================================

    fn read_node(&self, id: NodeId) -> Result<Node> {
        self.inner.nodes.read().get(&id).cloned()
            .ok_or_else(|| Error::NotFound(format!("Node {id}")))
    }

    fn read_relationships(
        &self,
        id: NodeId,
        filter: &RelationshipFilter,
        dir: Direction,
    ) -> Result<Vec<Relationship>> {
        let adj = self.inner.adjacency.read();
        let rel_ids = adj.get(&id).ok_or_else(|| Error::NotFound(format!("Node {id}")))?;
        let rels = self.inner.relationships.read();

        Ok(rel_ids.iter()
            .filter_map(|rid| rels.get(rid))
            .filter(|rel| filter.admits(id, rel, dir))
            .cloned()
            .collect())
    }

    fn shortest(
        &self,
        start: NodeId,
        end: NodeId,
        filter: &RelationshipFilter,
        max_hops: usize,
    ) -> Result<Path> {
        let start_node = self.read_node(start)?;
        self.read_node(end)?;
        if start == end {
            return Ok(Path::single(start_node));
        }

        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut parent: HashMap<NodeId, (NodeId, Relationship)> = HashMap::new();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
        visited.insert(start);
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_hops {
                continue;
            }
            for rel in self.read_relationships(current, filter, Direction::Both)? {
                let next = rel.neighbor_of(current);
                if !visited.insert(next) {
                    continue;
                }
                parent.insert(next, (current, rel));
                if next == end {
                    return self.reconstruct(start_node, end, &parent);
                }
                queue.push_back((next, depth + 1));
            }
        }

        Err(Error::NotFound(format!("Path {start} -> {end} within {max_hops} hops")))
    }

    fn reconstruct(
        &self,
        start: Node,
        end: NodeId,
        parent: &HashMap<NodeId, (NodeId, Relationship)>,
    ) -> Result<Path> {
        let mut hops = Vec::new();
        let mut current = end;
        while current != start.id {
            let (prev, rel) = parent.get(&current)
                .ok_or_else(|| Error::NotFound(format!("Path to {end}")))?;
            hops.push((rel.clone(), self.read_node(current)?));
            current = *prev;
        }

        let mut path = Path::single(start);
        for (rel, node) in hops.into_iter().rev() {
            path.append(rel, node);
        }
        Ok(path)
    }

    fn all_paths(
        &self,
        start: NodeId,
        end: NodeId,
        filter: &RelationshipFilter,
        max_hops: usize,
    ) -> Result<Vec<Path>> {
        let start_node = self.read_node(start)?;
        let mut found = Vec::new();
        let mut on_path: HashSet<NodeId> = HashSet::new();
        on_path.insert(start);
        let mut path = Path::single(start_node);
        self.collect_paths(&mut path, &mut on_path, end, filter, max_hops, &mut found);
        Ok(found)
    }

    fn collect_paths(
        &self,
        path: &mut Path,
        on_path: &mut HashSet<NodeId>,
        end: NodeId,
        filter: &RelationshipFilter,
        max_hops: usize,
        found: &mut Vec<Path>,
    ) {
        let Some(current) = path.end().map(|n| n.id) else { return };
        if current == end {
            found.push(path.clone());
            return;
        }
        if path.len() >= max_hops {
            return;
        }

        let Ok(rels) = self.read_relationships(current, filter, Direction::Both) else { return };
        for rel in rels {
            let next = rel.neighbor_of(current);
            if on_path.contains(&next) {
                continue;
            }
            let Ok(node) = self.read_node(next) else { continue };
            on_path.insert(next);
            path.append(rel, node);
            self.collect_paths(path, on_path, end, filter, max_hops, found);
            path.pop();
            on_path.remove(&next);
        }
    }
}

// ============================================================================
// GraphReadPort impl
// ============================================================================

#[async_trait]
impl GraphReadPort for MemoryGraph {
    async fn get_node(&self, id: NodeId) -> Result<Node> {
        self.read_node(id)
    }

    async fn get_node_neighbors(
        &self,
        id: NodeId,
        rel_filter: &str,
        dir: Direction,
    ) -> Result<Vec<Node>> {
        let rels = self.read_relationships(id, &RelationshipFilter::parse(rel_filter), dir)?;
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut neighbors = Vec::new();
        for rel in rels {
            let next = rel.neighbor_of(id);
            if seen.contains(&next) {
                continue;
            }
            if let Ok(node) = self.read_node(next) {
                seen.insert(next);
                neighbors.push(node);
            }
        }
        Ok(neighbors)
    }

    async fn get_node_relationships(
        &self,
        id: NodeId,
        rel_filter: &str,
        dir: Direction,
    ) -> Result<Vec<Relationship>> {
        self.read_relationships(id, &RelationshipFilter::parse(rel_filter), dir)
    }

    async fn find_shortest_path(
        &self,
        start: NodeId,
        end: NodeId,
        rel_filter: &str,
        max_hops: usize,
    ) -> Result<Path> {
        self.shortest(start, end, &RelationshipFilter::parse(rel_filter), max_hops)
    }

    async fn find_all_paths(
        &self,
        start: NodeId,
        end: NodeId,
        rel_filter: &str,
        max_hops: usize,
    ) -> Result<Vec<Path>> {
        self.all_paths(start, end, &RelationshipFilter::parse(rel_filter), max_hops)
    }
}

// ============================================================================
// Tests
// ============================================================================
