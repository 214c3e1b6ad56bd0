//! Traversal configuration.
//!
//! A typed replacement for the option maps APOC procedures accept. Callers
//! either build it with the `with_*` methods or load a procedure-style map:
//!
//! ```rust
//! use apoc_paths::{TraversalConfig, Uniqueness};
//!
//! let config = TraversalConfig::from_json(serde_json::json!({
//!     "minLevel": 1,
//!     "maxLevel": 3,
//!     "relationshipFilter": "KNOWS>",
//!     "uniqueness": "NODE_GLOBAL",
//! })).unwrap();
//! assert_eq!(config.max_level, Some(3));
//! assert_eq!(config.uniqueness, Uniqueness::NodeGlobal);
//! ```
//!
//! Nothing here is validated against anything else. A `min_level` above
//! `max_level` is a legal configuration that simply matches nothing.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::Value;
use crate::{Error, Result};

/// Rule for revisiting nodes or relationships during path expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Uniqueness {
    /// A node may appear once per branch: it is marked before descending and
    /// unmarked on return, so other branches may pass through it again.
    NodeGlobal,
    /// A relationship may appear once per branch.
    #[default]
    RelationshipPath,
    /// No guard at all. Only `max_level` bounds the walk.
    None,
}

/// Depth bounds, filters and limits for one traversal call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraversalConfig {
    /// Minimum hop count for a result to be emitted (inclusive).
    pub min_level: usize,
    /// Maximum hop count (inclusive). `None` means unbounded.
    #[serde(deserialize_with = "de_max_level")]
    pub max_level: Option<usize>,
    /// Forwarded verbatim to the read port.
    pub relationship_filter: String,
    /// Carried for backends and callers. The engine does not interpret it.
    pub label_filter: String,
    /// Maximum number of results. 0 means unbounded.
    #[serde(deserialize_with = "de_limit")]
    pub limit: usize,
    #[serde(alias = "unique")]
    pub uniqueness: Uniqueness,
    /// Expand paths level by level instead of depth-first.
    pub bfs: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            min_level: 0,
            max_level: None,
            relationship_filter: String::new(),
            label_filter: String::new(),
            limit: 0,
            uniqueness: Uniqueness::default(),
            bfs: false,
        }
    }
}

impl TraversalConfig {
    pub fn with_min_level(mut self, level: usize) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_max_level(mut self, level: usize) -> Self {
        self.max_level = Some(level);
        self
    }

    pub fn with_relationship_filter(mut self, filter: impl Into<String>) -> Self {
        self.relationship_filter = filter.into();
        self
    }

    pub fn with_label_filter(mut self, filter: impl Into<String>) -> Self {
        self.label_filter = filter.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = uniqueness;
        self
    }

    pub fn with_bfs(mut self, bfs: bool) -> Self {
        self.bfs = bfs;
        self
    }

    /// Load from a JSON option map. Missing keys keep their defaults.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(json)?)
    }

    /// Load from a procedure argument. `Null` yields the defaults.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Map(_) => Self::from_json(value.to_json()),
            other => Err(Error::InvalidConfig(format!(
                "expected MAP, got {}", other.type_name()
            ))),
        }
    }

    /// A node or path at `depth` hops is reported.
    pub(crate) fn emits(&self, depth: usize) -> bool {
        depth >= self.min_level
    }

    /// A node at `depth` hops may be expanded further.
    pub(crate) fn expands(&self, depth: usize) -> bool {
        self.max_level.is_none_or(|max| depth < max)
    }

    pub(crate) fn limit_reached(&self, count: usize) -> bool {
        self.limit > 0 && count >= self.limit
    }
}

/// `-1` and `null` both mean "no maximum".
fn de_max_level<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<Option<usize>, D::Error> {
    let raw = Option::<i64>::deserialize(de)?;
    Ok(raw.and_then(|n| usize::try_from(n).ok()))
}

/// Negative limits behave like 0: unbounded.
fn de_limit<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<usize, D::Error> {
    let raw = Option::<i64>::deserialize(de)?;
    Ok(raw.and_then(|n| usize::try_from(n).ok()).unwrap_or(0))
}
