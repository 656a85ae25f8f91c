//! Node identifier and kind types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque node identifier within a transit graph.
///
/// Identifiers are supplied by the graph-construction layer and carry no
/// semantic ordering or sign convention. The `Ord` implementation exists
/// solely so that tie-breaks (equal-distance Dijkstra pops, equal-length
/// route selection) are deterministic and documented.
///
/// # Examples
///
/// ```
/// use route_cover::models::NodeId;
///
/// let a = NodeId::new(3);
/// let b = NodeId::new(3);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Classification of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// May be traversed but need not be visited.
    Transit,
    /// Must be visited by exactly one route.
    Target,
}

impl NodeKind {
    /// Returns `true` for [`NodeKind::Target`].
    pub fn is_target(&self) -> bool {
        matches!(self, NodeKind::Target)
    }
}
