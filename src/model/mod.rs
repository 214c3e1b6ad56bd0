//! # Property Graph Model
//!
//! Plain DTOs shared by the read port, the traversal engine and callers.
//! Nodes and relationships are owned by the storage layer; the engine only
//! holds the copies a read hands back for the duration of one call.
//!
//! This module is pure data: no I/O, no state, no async.

pub mod node;
pub mod relationship;
pub mod path;
pub mod value;
pub mod property_map;

pub use node::{Node, NodeId};
pub use relationship::{Relationship, RelId, Direction};
pub use path::{Path, PathElement};
pub use value::Value;
pub use property_map::PropertyMap;
