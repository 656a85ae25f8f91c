//! Greedy multi-route constructor.
//!
//! # Algorithm
//!
//! One route per anchor, each starting as `[anchor]` with length zero.
//! While uncovered targets remain: take the route with the minimum
//! current length (ties break toward the lowest anchor id) and extend it
//! with the nearest unvisited target reachable from its last node. Stop
//! when coverage is complete or the selected route's nearest-target query
//! comes back empty; remaining targets are reported as uncovered rather
//! than failing.
//!
//! Always growing the currently shortest route is a load-balancing
//! heuristic, not a global optimum; the annealer refines the result.
//!
//! # Complexity
//!
//! One Dijkstra run per covered target, O(t · (n + e) log n).

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::graph::TransitGraph;
use crate::models::{CoverageStatus, NodeId, Solution};
use crate::shortest_path::nearest_unvisited_target;

/// Invalid anchor input to [`build_initial_solution`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoverError {
    /// No anchors were supplied.
    #[error("at least one anchor is required")]
    NoAnchors,
    /// The same anchor appeared more than once.
    #[error("duplicate anchor {0}")]
    DuplicateAnchor(NodeId),
    /// An anchor is not a node of the graph.
    #[error("anchor {0} is not a node of the graph")]
    UnknownAnchor(NodeId),
}

/// Builds an initial solution covering the graph's target set.
///
/// Anchors must be distinct nodes of the graph; they may or may not be
/// targets themselves. Anchors are pre-marked visited, so an anchor that
/// is also a target is considered covered by its own route at time zero.
///
/// Returns the solution together with a [`CoverageStatus`]: partial
/// coverage (some targets unreachable from the growing routes) is a
/// successful-but-incomplete result, never an error.
///
/// # Examples
///
/// ```
/// use route_cover::constructive::build_initial_solution;
/// use route_cover::graph::TransitGraph;
/// use route_cover::models::{NodeId, NodeKind};
///
/// let mut g = TransitGraph::new();
/// let (a, t) = (NodeId::new(0), NodeId::new(1));
/// g.add_node(a, NodeKind::Transit);
/// g.add_node(t, NodeKind::Target);
/// g.add_edge_bidirectional(a, t, 2.0);
///
/// let (solution, status) = build_initial_solution(&g, &[a]).unwrap();
/// assert!(status.is_full());
/// assert_eq!(solution.route(a).unwrap().nodes(), &[a, t]);
/// ```
pub fn build_initial_solution(
    graph: &TransitGraph,
    anchors: &[NodeId],
) -> Result<(Solution, CoverageStatus), CoverError> {
    if anchors.is_empty() {
        return Err(CoverError::NoAnchors);
    }
    let mut seen = HashSet::new();
    for &anchor in anchors {
        if !graph.contains(anchor) {
            return Err(CoverError::UnknownAnchor(anchor));
        }
        if !seen.insert(anchor) {
            return Err(CoverError::DuplicateAnchor(anchor));
        }
    }

    let mut solution = Solution::with_anchors(anchors);
    let mut visited: HashSet<NodeId> = anchors.iter().copied().collect();
    let targets = graph.targets();
    let mut remaining = targets.iter().filter(|t| !visited.contains(t)).count();

    while remaining > 0 {
        let anchor = solution
            .shortest_route_anchor()
            .expect("anchors validated non-empty");
        let from = solution
            .route(anchor)
            .expect("route exists for every anchor")
            .last();

        match nearest_unvisited_target(graph, from, &visited) {
            Some((target, leg, _path)) => {
                solution
                    .route_mut(anchor)
                    .expect("route exists for every anchor")
                    .push_target(target, leg);
                visited.insert(target);
                remaining -= 1;
                debug!(%anchor, %target, leg, "extended route");
            }
            None => break,
        }
    }

    let uncovered: Vec<NodeId> = targets
        .into_iter()
        .filter(|t| !visited.contains(t))
        .collect();
    let status = if uncovered.is_empty() {
        CoverageStatus::Full
    } else {
        debug!(uncovered = uncovered.len(), "partial coverage");
        CoverageStatus::Partial { uncovered }
    };

    Ok((solution, status))
}
