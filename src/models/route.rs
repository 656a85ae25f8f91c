//! Pure route type.

use super::NodeId;

/// An ordered sequence of anchor and target nodes, with a tracked length.
///
/// The anchor is always element 0 and never moves. Intermediate transit
/// nodes are not represented; only the anchor and assigned targets appear,
/// in visiting order. The tracked `length` is the sum of shortest-path
/// distances between consecutive elements and is maintained incrementally
/// by the constructor and the annealer through the mutators below.
///
/// # Examples
///
/// ```
/// use route_cover::models::{NodeId, PureRoute};
///
/// let mut route = PureRoute::new(NodeId::new(0));
/// route.push_target(NodeId::new(5), 2.5);
/// assert_eq!(route.anchor(), NodeId::new(0));
/// assert_eq!(route.target_count(), 1);
/// assert!((route.length() - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PureRoute {
    nodes: Vec<NodeId>,
    length: f64,
}

impl PureRoute {
    /// Creates a route containing only its anchor, with length zero.
    pub fn new(anchor: NodeId) -> Self {
        Self {
            nodes: vec![anchor],
            length: 0.0,
        }
    }

    /// The route's start (and required end) node.
    pub fn anchor(&self) -> NodeId {
        self.nodes[0]
    }

    /// The anchor followed by assigned targets, in visiting order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of elements including the anchor.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a route never loses its anchor.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of assigned targets (anchor excluded).
    pub fn target_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The most recently visited node (the anchor for a fresh route).
    pub fn last(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// The incrementally tracked route length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Appends a target reached by a leg of the given cost.
    pub fn push_target(&mut self, target: NodeId, leg_cost: f64) {
        self.nodes.push(target);
        self.length += leg_cost;
    }

    /// Reverses the interior span `[l..=r]` and applies the length delta.
    ///
    /// Callers guarantee `0 < l <= r < len - 1` so the anchor and the
    /// final element stay in place.
    pub(crate) fn reverse_segment(&mut self, l: usize, r: usize, delta: f64) {
        debug_assert!(0 < l && l <= r && r < self.nodes.len() - 1);
        self.nodes[l..=r].reverse();
        self.length += delta;
    }

    /// Removes the non-anchor element at `index`, applying the length delta.
    pub(crate) fn remove_at(&mut self, index: usize, delta: f64) -> NodeId {
        debug_assert!(index > 0);
        self.length += delta;
        self.nodes.remove(index)
    }

    /// Inserts `node` at `index` (never 0), applying the length delta.
    pub(crate) fn insert_at(&mut self, index: usize, node: NodeId, delta: f64) {
        debug_assert!(index > 0 && index <= self.nodes.len());
        self.nodes.insert(index, node);
        self.length += delta;
    }
}
