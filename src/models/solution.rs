//! Solution and coverage status types.

use std::collections::BTreeMap;

use super::{NodeId, PureRoute};

/// Whether greedy construction managed to cover the whole target set.
///
/// Partial coverage is a reachability outcome, not an error: the caller
/// receives the solution that was built along with the exact targets no
/// route could reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageStatus {
    /// Every target appears in exactly one route.
    Full,
    /// Some targets were unreachable from the growing routes.
    Partial {
        /// Targets left out of every route, in ascending id order.
        uncovered: Vec<NodeId>,
    },
}

impl CoverageStatus {
    /// Returns `true` if no targets were left uncovered.
    pub fn is_full(&self) -> bool {
        matches!(self, CoverageStatus::Full)
    }

    /// The uncovered targets (empty for full coverage).
    pub fn uncovered(&self) -> &[NodeId] {
        match self {
            CoverageStatus::Full => &[],
            CoverageStatus::Partial { uncovered } => uncovered,
        }
    }
}

/// A partition of covered targets into one [`PureRoute`] per anchor.
///
/// Routes are keyed by anchor id in a `BTreeMap`, so iteration order (and
/// with it every tie-break that scans routes) is deterministic: lowest
/// anchor id first.
///
/// # Examples
///
/// ```
/// use route_cover::models::{NodeId, Solution};
///
/// let sol = Solution::with_anchors(&[NodeId::new(2), NodeId::new(1)]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.max_length(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    routes: BTreeMap<NodeId, PureRoute>,
}

impl Solution {
    /// Creates one empty route per anchor.
    ///
    /// Duplicate anchors collapse to a single route; the constructor
    /// validates distinctness before calling this.
    pub fn with_anchors(anchors: &[NodeId]) -> Self {
        let routes = anchors
            .iter()
            .map(|&a| (a, PureRoute::new(a)))
            .collect();
        Self { routes }
    }

    /// Number of routes (one per anchor).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Anchors in ascending id order.
    pub fn anchors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.routes.keys().copied()
    }

    /// Routes in ascending anchor id order.
    pub fn routes(&self) -> impl Iterator<Item = &PureRoute> {
        self.routes.values()
    }

    /// The route anchored at `anchor`, if any.
    pub fn route(&self, anchor: NodeId) -> Option<&PureRoute> {
        self.routes.get(&anchor)
    }

    /// Mutable access for the constructor and the annealer only.
    pub(crate) fn route_mut(&mut self, anchor: NodeId) -> Option<&mut PureRoute> {
        self.routes.get_mut(&anchor)
    }

    /// Tracked length per anchor, in ascending anchor id order.
    pub fn lengths(&self) -> BTreeMap<NodeId, f64> {
        self.routes
            .iter()
            .map(|(&a, r)| (a, r.length()))
            .collect()
    }

    /// The largest tracked route length (0.0 when all routes are empty).
    pub fn max_length(&self) -> f64 {
        self.routes
            .values()
            .map(|r| r.length())
            .fold(0.0, f64::max)
    }

    /// Anchor of the currently shortest route.
    ///
    /// Ties break toward the lowest anchor id (map iteration order).
    pub fn shortest_route_anchor(&self) -> Option<NodeId> {
        self.routes
            .iter()
            .min_by(|(_, a), (_, b)| a.length().total_cmp(&b.length()))
            .map(|(&anchor, _)| anchor)
    }

    /// Anchor of the currently longest route.
    ///
    /// Ties break toward the lowest anchor id (map iteration order).
    pub fn longest_route_anchor(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for (&anchor, route) in &self.routes {
            match best {
                Some((_, len)) if route.length() <= len => {}
                _ => best = Some((anchor, route.length())),
            }
        }
        best.map(|(anchor, _)| anchor)
    }

    /// Total number of targets assigned across all routes.
    pub fn num_covered(&self) -> usize {
        self.routes.values().map(|r| r.target_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    #[test]
    fn test_with_anchors_deterministic_order() {
        let sol = Solution::with_anchors(&[id(9), id(3), id(5)]);
        let anchors: Vec<NodeId> = sol.anchors().collect();
        assert_eq!(anchors, vec![id(3), id(5), id(9)]);
        assert_eq!(sol.num_routes(), 3);
        assert_eq!(sol.num_covered(), 0);
    }

    #[test]
    fn test_shortest_route_tie_breaks_low_anchor() {
        let sol = Solution::with_anchors(&[id(4), id(2)]);
        // All lengths zero: lowest anchor id wins.
        assert_eq!(sol.shortest_route_anchor(), Some(id(2)));
    }

    #[test]
    fn test_longest_route_selection() {
        let mut sol = Solution::with_anchors(&[id(1), id(2)]);
        sol.route_mut(id(2)).unwrap().push_target(id(10), 5.0);
        assert_eq!(sol.longest_route_anchor(), Some(id(2)));
        assert_eq!(sol.shortest_route_anchor(), Some(id(1)));
        assert!((sol.max_length() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_longest_route_tie_breaks_low_anchor() {
        let sol = Solution::with_anchors(&[id(4), id(2)]);
        assert_eq!(sol.longest_route_anchor(), Some(id(2)));
    }

    #[test]
    fn test_lengths_map() {
        let mut sol = Solution::with_anchors(&[id(1)]);
        sol.route_mut(id(1)).unwrap().push_target(id(8), 2.0);
        let lengths = sol.lengths();
        assert_eq!(lengths.len(), 1);
        assert!((lengths[&id(1)] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_coverage_status_accessors() {
        assert!(CoverageStatus::Full.is_full());
        assert!(CoverageStatus::Full.uncovered().is_empty());
        let partial = CoverageStatus::Partial {
            uncovered: vec![id(7)],
        };
        assert!(!partial.is_full());
        assert_eq!(partial.uncovered(), &[id(7)]);
    }
}
