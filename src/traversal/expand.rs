//! Path expansion (`apoc.path.expandConfig` / `apoc.path.expand`).
//!
//! Emits an explicit `Path` for every walk from the start node that passes
//! the filters, depth bounds and uniqueness rule. Every prefix of accepted
//! length is emitted, not just maximal walks.

use std::collections::VecDeque;

use hashbrown::HashSet;
use tracing::trace;

use crate::config::{TraversalConfig, Uniqueness};
use crate::model::*;
use crate::storage::GraphReadPort;
use super::PathFinder;

/// Per-branch uniqueness bookkeeping for the depth-first walk.
///
/// Entries are claimed before descending and released on the way back up,
/// so the guarded set always equals what is on the current branch.
enum BranchGuard {
    Nodes(HashSet<NodeId>),
    Relationships(HashSet<RelId>),
    Off,
}

impl BranchGuard {
    fn new(uniqueness: Uniqueness, start: NodeId) -> Self {
        match uniqueness {
            Uniqueness::NodeGlobal => Self::Nodes(HashSet::from([start])),
            Uniqueness::RelationshipPath => Self::Relationships(HashSet::new()),
            Uniqueness::None => Self::Off,
        }
    }

    fn admits(&self, rel: &Relationship, next: NodeId) -> bool {
        match self {
            Self::Nodes(nodes) => !nodes.contains(&next),
            Self::Relationships(rels) => !rels.contains(&rel.id),
            Self::Off => true,
        }
    }

    fn claim(&mut self, rel: &Relationship, next: NodeId) {
        match self {
            Self::Nodes(nodes) => { nodes.insert(next); }
            Self::Relationships(rels) => { rels.insert(rel.id); }
            Self::Off => {}
        }
    }

    fn release(&mut self, rel: &Relationship, node: NodeId) {
        match self {
            Self::Nodes(nodes) => { nodes.remove(&node); }
            Self::Relationships(rels) => { rels.remove(&rel.id); }
            Self::Off => {}
        }
    }
}

/// Same rule as [`BranchGuard`], checked against the path being extended.
fn admits_on_path(uniqueness: Uniqueness, path: &Path, rel: &Relationship, next: NodeId) -> bool {
    match uniqueness {
        Uniqueness::NodeGlobal => !path.contains_node(next),
        Uniqueness::RelationshipPath => !path.contains_relationship(rel.id),
        Uniqueness::None => true,
    }
}

impl<G: GraphReadPort> PathFinder<G> {
    /// Expand paths from `start` under `config`.
    ///
    /// Depth-first by default: paths come out in pre-order of discovery,
    /// which is not sorted by length. With `config.bfs` the same set comes
    /// out level by level. At most `limit` paths are returned.
    ///
    /// With `Uniqueness::None` and no `max_level` a cyclic graph never
    /// finishes; bound one of them.
    pub async fn expand_config(&self, start: &Node, config: &TraversalConfig) -> Vec<Path> {
        let paths = if config.bfs {
            self.expand_breadth_first(start, config).await
        } else {
            self.expand_depth_first(start, config).await
        };
        trace!(start = %start.id, bfs = config.bfs, found = paths.len(), "expand");
        paths
    }

    /// `apoc.path.expand(start, relFilter, labelFilter, minLevel, maxLevel)`.
    pub async fn expand(
        &self,
        start: &Node,
        rel_filter: &str,
        label_filter: &str,
        min_level: usize,
        max_level: usize,
    ) -> Vec<Path> {
        let config = TraversalConfig::default()
            .with_relationship_filter(rel_filter)
            .with_label_filter(label_filter)
            .with_min_level(min_level)
            .with_max_level(max_level);
        self.expand_config(start, &config).await
    }

    async fn expand_depth_first(&self, start: &Node, config: &TraversalConfig) -> Vec<Path> {
        let filter = config.relationship_filter.as_str();
        let mut paths = Vec::new();
        let mut guard = BranchGuard::new(config.uniqueness, start.id);
        let mut path = Path::single(start.clone());

        if config.emits(0) {
            paths.push(path.clone());
        }
        if config.limit_reached(paths.len()) || !config.expands(0) {
            return paths;
        }

        // One frame per node on the current branch: the relationships of
        // that node still to be tried.
        let mut stack = vec![self.relationships_or_skip(start.id, filter).await.into_iter()];

        while let Some(frame) = stack.last_mut() {
            if config.limit_reached(paths.len()) {
                break;
            }

            let Some(rel) = frame.next() else {
                stack.pop();
                if let Some((rel, node)) = path.pop() {
                    guard.release(&rel, node.id);
                }
                continue;
            };

            let Some(current) = path.end().map(|n| n.id) else { break };
            let next = rel.neighbor_of(current);
            if !guard.admits(&rel, next) {
                continue;
            }
            let Some(node) = self.resolve(next).await else { continue };

            guard.claim(&rel, next);
            path.append(rel, node);
            let depth = path.len();

            if config.emits(depth) {
                paths.push(path.clone());
            }

            if config.expands(depth) && !config.limit_reached(paths.len()) {
                stack.push(self.relationships_or_skip(next, filter).await.into_iter());
            } else if let Some((rel, node)) = path.pop() {
                guard.release(&rel, node.id);
            }
        }

        paths
    }

    async fn expand_breadth_first(&self, start: &Node, config: &TraversalConfig) -> Vec<Path> {
        let filter = config.relationship_filter.as_str();
        let mut paths = Vec::new();
        let root = Path::single(start.clone());

        if config.emits(0) {
            paths.push(root.clone());
        }
        if config.limit_reached(paths.len()) {
            return paths;
        }

        let mut queue = VecDeque::from([root]);
        while let Some(path) = queue.pop_front() {
            if !config.expands(path.len()) {
                continue;
            }
            let Some(current) = path.end().map(|n| n.id) else { continue };

            for rel in self.relationships_or_skip(current, filter).await {
                let next = rel.neighbor_of(current);
                if !admits_on_path(config.uniqueness, &path, &rel, next) {
                    continue;
                }
                let Some(node) = self.resolve(next).await else { continue };

                let extended = path.extended(rel, node);
                if config.emits(extended.len()) {
                    paths.push(extended.clone());
                    if config.limit_reached(paths.len()) {
                        return paths;
                    }
                }
                queue.push_back(extended);
            }
        }

        paths
    }
}
