//! Weighted directed multigraph of transit and target nodes.
//!
//! The graph is built once by the caller (typically from a street network)
//! and is read-only for the lifetime of the engine's operation: every
//! phase borrows it immutably.

use std::collections::HashMap;

use crate::models::{NodeId, NodeKind};

/// A directed edge leaving a node.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Arc {
    to: NodeId,
    length: f64,
}

/// A weighted directed multigraph with per-node kind tags.
///
/// Parallel edges between the same ordered pair are permitted; shortest
/// path queries naturally use the cheapest one. Edge lengths must be
/// finite and nonnegative.
///
/// # Examples
///
/// ```
/// use route_cover::graph::TransitGraph;
/// use route_cover::models::{NodeId, NodeKind};
///
/// let mut g = TransitGraph::new();
/// let a = NodeId::new(0);
/// let b = NodeId::new(1);
/// g.add_node(a, NodeKind::Transit);
/// g.add_node(b, NodeKind::Target);
/// g.add_edge(a, b, 2.0);
/// assert_eq!(g.num_nodes(), 2);
/// assert_eq!(g.kind(b), Some(NodeKind::Target));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    kinds: HashMap<NodeId, NodeKind>,
    adjacency: HashMap<NodeId, Vec<Arc>>,
    num_edges: usize,
}

impl TransitGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, or retags an existing one.
    pub fn add_node(&mut self, id: NodeId, kind: NodeKind) {
        self.kinds.insert(id, kind);
        self.adjacency.entry(id).or_default();
    }

    /// Adds a directed edge. Both endpoints must already be nodes.
    ///
    /// # Panics
    ///
    /// Panics if `length` is negative or non-finite, or if either
    /// endpoint has not been added.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, length: f64) {
        assert!(
            length.is_finite() && length >= 0.0,
            "edge length must be finite and nonnegative, got {length}"
        );
        assert!(self.kinds.contains_key(&from), "unknown edge source {from}");
        assert!(self.kinds.contains_key(&to), "unknown edge destination {to}");
        self.adjacency
            .get_mut(&from)
            .expect("adjacency row exists for every node")
            .push(Arc { to, length });
        self.num_edges += 1;
    }

    /// Adds the pair of directed edges `from -> to` and `to -> from`.
    pub fn add_edge_bidirectional(&mut self, a: NodeId, b: NodeId, length: f64) {
        self.add_edge(a, b, length);
        self.add_edge(b, a, length);
    }

    /// The kind of `id`, or `None` if the node does not exist.
    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.kinds.get(&id).copied()
    }

    /// Returns `true` if `id` is a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        self.kinds.contains_key(&id)
    }

    /// Returns `true` if `id` exists and is tagged [`NodeKind::Target`].
    pub fn is_target(&self, id: NodeId) -> bool {
        self.kind(id).is_some_and(|k| k.is_target())
    }

    /// Outgoing `(neighbor, length)` pairs of `id`, one per parallel edge.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flatten()
            .map(|arc| (arc.to, arc.length))
    }

    /// The cheapest direct edge `from -> to`, if any.
    pub fn edge_length(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors(from)
            .filter(|&(n, _)| n == to)
            .map(|(_, len)| len)
            .min_by(f64::total_cmp)
    }

    /// All target node ids, in ascending order.
    pub fn targets(&self) -> Vec<NodeId> {
        let mut targets: Vec<NodeId> = self
            .kinds
            .iter()
            .filter(|(_, k)| k.is_target())
            .map(|(&id, _)| id)
            .collect();
        targets.sort_unstable();
        targets
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.kinds.len()
    }

    /// Number of directed edges, parallel edges counted individually.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}
