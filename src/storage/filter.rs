//! Relationship filter strings.
//!
//! The engine forwards filters to the port verbatim. Backends that want the
//! APOC syntax parse them here:
//!
//! ```text
//! KNOWS          KNOWS in either direction
//! KNOWS>         outgoing KNOWS
//! <KNOWS         incoming KNOWS
//! >  /  <        any type, outgoing / incoming
//! KNOWS>|<LIKES  alternatives
//! ```
//!
//! An empty filter admits every relationship.

use smallvec::SmallVec;

use crate::model::{Direction, NodeId, Relationship};

/// One `|`-separated alternative of a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    /// `None` admits any type.
    pub rel_type: Option<String>,
    pub direction: Direction,
}

impl FilterEntry {
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let (body, direction) = if let Some(rest) = raw.strip_prefix('<') {
            (rest, Direction::Incoming)
        } else if let Some(rest) = raw.strip_suffix('>') {
            (rest, Direction::Outgoing)
        } else {
            (raw, Direction::Both)
        };
        let body = body.trim();
        let rel_type = (!body.is_empty()).then(|| body.to_string());
        Some(Self { rel_type, direction })
    }

    fn matches(&self, node: NodeId, rel: &Relationship) -> bool {
        self.rel_type.as_deref().is_none_or(|t| t == rel.rel_type)
            && self.direction.admits(node, rel)
    }
}

/// Parsed relationship filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipFilter {
    entries: SmallVec<[FilterEntry; 2]>,
}

impl RelationshipFilter {
    pub fn parse(raw: &str) -> Self {
        Self {
            entries: raw.split('|').filter_map(FilterEntry::parse).collect(),
        }
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn is_any(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `rel`, read from `node`, passes both this filter and the
    /// read-level direction.
    pub fn admits(&self, node: NodeId, rel: &Relationship, dir: Direction) -> bool {
        if !dir.admits(node, rel) {
            return false;
        }
        self.is_any() || self.entries.iter().any(|e| e.matches(node, rel))
    }
}

impl From<&str> for RelationshipFilter {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelId;

    fn knows(src: u64, dst: u64) -> Relationship {
        Relationship::new(RelId(1), NodeId(src), NodeId(dst), "KNOWS")
    }

    #[test]
    fn test_empty_filter_admits_everything() {
        let f = RelationshipFilter::parse("");
        assert!(f.is_any());
        assert!(f.admits(NodeId(1), &knows(1, 2), Direction::Both));
        assert!(f.admits(NodeId(2), &knows(1, 2), Direction::Both));
    }

    #[test]
    fn test_outgoing_entry() {
        let f = RelationshipFilter::parse("KNOWS>");
        assert_eq!(f.entries()[0].direction, Direction::Outgoing);
        assert!(f.admits(NodeId(1), &knows(1, 2), Direction::Both));
        assert!(!f.admits(NodeId(2), &knows(1, 2), Direction::Both));
    }

    #[test]
    fn test_incoming_any_type() {
        let f = RelationshipFilter::parse("<");
        assert_eq!(f.entries()[0].rel_type, None);
        assert!(f.admits(NodeId(2), &knows(1, 2), Direction::Both));
        assert!(!f.admits(NodeId(1), &knows(1, 2), Direction::Both));
    }

    #[test]
    fn test_alternatives_and_type_mismatch() {
        let f = RelationshipFilter::parse("LIKES> | <KNOWS");
        assert_eq!(f.entries().len(), 2);
        assert!(f.admits(NodeId(2), &knows(1, 2), Direction::Both));
        assert!(!f.admits(NodeId(1), &knows(1, 2), Direction::Both));
    }

    #[test]
    fn test_read_direction_still_applies() {
        let f = RelationshipFilter::parse("KNOWS");
        assert!(!f.admits(NodeId(1), &knows(1, 2), Direction::Incoming));
        assert!(!f.admits(NodeId(3), &knows(1, 2), Direction::Both));
    }
}
