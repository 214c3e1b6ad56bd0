//! Path algebra (`apoc.path.combine`, `apoc.path.elements`,
//! `apoc.path.slice` and friends).
//!
//! Pure functions over finished paths. Inputs are never modified; each
//! function builds a new `Path`. Nothing here checks that consecutive
//! relationships actually connect; callers pass paths that chain.

use hashbrown::HashSet;

use crate::model::{Node, NodeId, Path, PathElement, RelId};

/// Concatenate paths in argument order, without de-duplication.
///
/// Combining `a-b` with `b-c` repeats `b`; combining nothing yields the
/// empty path.
pub fn combine<'a>(paths: impl IntoIterator<Item = &'a Path>) -> Path {
    let mut combined = Path::empty();
    for path in paths {
        combined.nodes.extend(path.nodes.iter().cloned());
        combined.relationships.extend(path.relationships.iter().cloned());
    }
    combined
}

/// Flatten into `[node0, rel0, node1, rel1, ..., nodeN]`.
///
/// A relationship with no following node is dropped.
pub fn elements(path: &Path) -> Vec<PathElement> {
    let mut out = Vec::with_capacity(path.nodes.len() + path.relationships.len());
    for (i, node) in path.nodes.iter().enumerate() {
        out.push(PathElement::Node(node.clone()));
        if let Some(rel) = path.relationships.get(i) {
            if i + 1 < path.nodes.len() {
                out.push(PathElement::Relationship(rel.clone()));
            }
        }
    }
    out
}

/// Sub-path over the node index range `[start, end)`.
///
/// Out-of-range bounds are clamped. An empty range gives the empty path.
/// Relationships `[start, end - 1)` come along, so the result keeps one
/// more node than relationships.
pub fn slice(path: &Path, start: i64, end: i64) -> Path {
    let node_count = path.nodes.len();
    let start = usize::try_from(start).unwrap_or(0);
    let end = usize::try_from(end).unwrap_or(0).min(node_count);
    if start >= end {
        return Path::empty();
    }

    let rel_count = path.relationships.len();
    let relationships = if start < rel_count {
        path.relationships[start..(end - 1).min(rel_count)].to_vec()
    } else {
        Vec::new()
    };

    Path {
        nodes: path.nodes[start..end].to_vec(),
        relationships,
    }
}

/// The same walk traversed from the other end.
pub fn reverse(path: &Path) -> Path {
    Path {
        nodes: path.nodes.iter().rev().cloned().collect(),
        relationships: path.relationships.iter().rev().cloned().collect(),
    }
}

/// Nodes present in every path, in order of first appearance.
pub fn common_nodes(paths: &[Path]) -> Vec<Node> {
    let Some((first, rest)) = paths.split_first() else { return Vec::new() };
    let members: Vec<HashSet<NodeId>> = rest.iter()
        .map(|p| p.nodes.iter().map(|n| n.id).collect())
        .collect();

    let mut seen: HashSet<NodeId> = HashSet::new();
    first.nodes.iter()
        .filter(|n| seen.insert(n.id))
        .filter(|n| members.iter().all(|m| m.contains(&n.id)))
        .cloned()
        .collect()
}

/// Distinct nodes across all paths, in order of first appearance.
pub fn unique_nodes(paths: &[Path]) -> Vec<Node> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    paths.iter()
        .flat_map(|p| p.nodes.iter())
        .filter(|n| seen.insert(n.id))
        .cloned()
        .collect()
}

/// No node repeats.
pub fn is_simple(path: &Path) -> bool {
    let mut seen: HashSet<NodeId> = HashSet::new();
    path.nodes.iter().all(|n| seen.insert(n.id))
}

/// No relationship repeats.
pub fn is_elementary(path: &Path) -> bool {
    let mut seen: HashSet<RelId> = HashSet::new();
    path.relationships.iter().all(|r| seen.insert(r.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Relationship;
    use pretty_assertions::assert_eq;

    /// Chain over the given node ids with KNOWS relationships.
    fn chain(ids: &[u64]) -> Path {
        let mut path = Path::single(Node::new(NodeId(ids[0])));
        for pair in ids.windows(2) {
            path.append(
                Relationship::new(RelId(pair[0] * 100 + pair[1]), NodeId(pair[0]), NodeId(pair[1]), "KNOWS"),
                Node::new(NodeId(pair[1])),
            );
        }
        path
    }

    fn node_ids(path: &Path) -> Vec<u64> {
        path.nodes.iter().map(|n| n.id.0).collect()
    }

    #[test]
    fn test_combine_keeps_everything() {
        let combined = combine([&chain(&[1, 2]), &chain(&[2, 3, 4])]);
        assert_eq!(node_ids(&combined), vec![1, 2, 2, 3, 4]);
        assert_eq!(combined.len(), 3);
        assert_eq!(combine(std::iter::empty::<&Path>()), Path::empty());
    }

    #[test]
    fn test_elements_interleave() {
        let flat = elements(&chain(&[1, 2, 3]));
        assert_eq!(flat.len(), 5);
        assert!(flat[0].as_node().is_some());
        assert!(flat[1].as_relationship().is_some());
        assert_eq!(flat[4].as_node().map(|n| n.id), Some(NodeId(3)));
    }

    #[test]
    fn test_elements_drops_trailing_relationship() {
        let mut broken = chain(&[1, 2]);
        broken.relationships.push(Relationship::new(RelId(9), NodeId(2), NodeId(3), "KNOWS"));
        assert_eq!(elements(&broken).len(), 3);
    }

    #[test]
    fn test_slice_middle() {
        let path = chain(&[0, 1, 2, 3, 4]);
        let sub = slice(&path, 1, 4);
        assert_eq!(node_ids(&sub), vec![1, 2, 3]);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub.relationships[0].src, NodeId(1));
    }

    #[test]
    fn test_slice_end_is_exclusive() {
        let path = chain(&[0, 1, 2, 3, 4]);
        let sub = slice(&path, 1, 3);
        assert_eq!(node_ids(&sub), vec![1, 2]);
        assert_eq!(sub.relationships.len(), 1);
        assert_eq!(sub.relationships[0].id, RelId(102));
    }

    #[test]
    fn test_slice_clamps_and_degenerates() {
        let path = chain(&[0, 1, 2]);
        assert_eq!(slice(&path, -5, 99), path);
        assert_eq!(slice(&path, 2, 2), Path::empty());
        assert_eq!(slice(&path, 3, 1), Path::empty());

        let last = slice(&path, 2, 3);
        assert_eq!(node_ids(&last), vec![2]);
        assert!(last.relationships.is_empty());
    }

    #[test]
    fn test_reverse() {
        let reversed = reverse(&chain(&[1, 2, 3]));
        assert_eq!(node_ids(&reversed), vec![3, 2, 1]);
        assert_eq!(reversed.relationships[0].id, RelId(203));
    }

    #[test]
    fn test_common_and_unique_nodes() {
        let paths = [chain(&[1, 2, 3]), chain(&[4, 2, 3]), chain(&[3, 2])];
        let common: Vec<u64> = common_nodes(&paths).iter().map(|n| n.id.0).collect();
        assert_eq!(common, vec![2, 3]);

        let unique: Vec<u64> = unique_nodes(&paths).iter().map(|n| n.id.0).collect();
        assert_eq!(unique, vec![1, 2, 3, 4]);
        assert!(common_nodes(&[]).is_empty());
    }

    #[test]
    fn test_simple_and_elementary() {
        assert!(is_simple(&chain(&[1, 2, 3])));
        assert!(!is_simple(&chain(&[1, 2, 1])));
        // 1-2-1 uses two different relationship ids (102, 201)
        assert!(is_elementary(&chain(&[1, 2, 1])));
        assert!(!is_elementary(&combine([&chain(&[1, 2]), &chain(&[1, 2])])));
    }
}
