//! Expansion of pure routes into full node-level paths.
//!
//! A pure route abstracts transit nodes away; realization puts them back
//! by concatenating one concrete shortest path per consecutive pair and
//! closing the tour back to the anchor. The traversed length is
//! recomputed from literal edge weights and checked against the
//! incrementally tracked value; divergence beyond tolerance means the
//! delta bookkeeping corrupted a length and is surfaced loudly.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::graph::TransitGraph;
use crate::models::{NodeId, Solution};
use crate::shortest_path::shortest_path;

/// Permitted relative drift between a tracked route length and the
/// ground truth recomputed during realization.
pub const LENGTH_TOLERANCE: f64 = 1e-6;

/// Realization failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RealizeError {
    /// A consecutive pair of the pure route has no connecting path.
    #[error("no path from {from} to {to} in route anchored at {anchor}")]
    UnreachableLeg {
        anchor: NodeId,
        from: NodeId,
        to: NodeId,
    },
    /// The tracked length diverged from the recomputed ground truth,
    /// indicating corrupted delta bookkeeping. Programming error, not a
    /// property of the input.
    #[error(
        "route anchored at {anchor}: tracked length {tracked} diverged from recomputed {recomputed}"
    )]
    LengthDrift {
        anchor: NodeId,
        tracked: f64,
        recomputed: f64,
    },
}

/// A pure route expanded into an explicit, traversable node path.
///
/// Starts at the anchor, passes through every assigned target in order
/// (transit nodes included), and ends back at the anchor. `length` is the
/// literal sum of traversed edge weights, closing leg included.
#[derive(Debug, Clone, PartialEq)]
pub struct RealizedRoute {
    nodes: Vec<NodeId>,
    length: f64,
}

impl RealizedRoute {
    /// The full node path, anchor at both ends (a lone anchor is a
    /// single-element path).
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The route's anchor.
    pub fn anchor(&self) -> NodeId {
        self.nodes[0]
    }

    /// Recomputed traversed length, closing leg included.
    pub fn length(&self) -> f64 {
        self.length
    }
}

/// Expands one leg into its node path and literal edge-weight cost.
fn expand_leg(
    graph: &TransitGraph,
    anchor: NodeId,
    from: NodeId,
    to: NodeId,
) -> Result<(Vec<NodeId>, f64), RealizeError> {
    let path = shortest_path(graph, from, to).ok_or(RealizeError::UnreachableLeg {
        anchor,
        from,
        to,
    })?;
    let mut cost = 0.0;
    for pair in path.windows(2) {
        // Every consecutive pair of a Dijkstra path is a direct edge.
        cost += graph
            .edge_length(pair[0], pair[1])
            .expect("shortest path steps along existing edges");
    }
    Ok((path, cost))
}

/// Realizes every route of a solution.
///
/// For each pure route: concatenate per-leg shortest paths (dropping the
/// duplicated join node), validate the open-route length against the
/// tracked value, then close the tour back to the anchor.
///
/// # Examples
///
/// ```
/// use route_cover::constructive::build_initial_solution;
/// use route_cover::graph::TransitGraph;
/// use route_cover::models::{NodeId, NodeKind};
/// use route_cover::realize::realize;
///
/// let mut g = TransitGraph::new();
/// let (a, v, t) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
/// g.add_node(a, NodeKind::Transit);
/// g.add_node(v, NodeKind::Transit);
/// g.add_node(t, NodeKind::Target);
/// g.add_edge_bidirectional(a, v, 1.0);
/// g.add_edge_bidirectional(v, t, 1.0);
///
/// let (solution, _) = build_initial_solution(&g, &[a]).unwrap();
/// let realized = realize(&g, &solution).unwrap();
/// // Out through the transit node and back again.
/// assert_eq!(realized[&a].nodes(), &[a, v, t, v, a]);
/// assert!((realized[&a].length() - 4.0).abs() < 1e-10);
/// ```
pub fn realize(
    graph: &TransitGraph,
    solution: &Solution,
) -> Result<BTreeMap<NodeId, RealizedRoute>, RealizeError> {
    let mut realized = BTreeMap::new();

    for route in solution.routes() {
        let anchor = route.anchor();
        let pure = route.nodes();
        let mut nodes = vec![anchor];
        let mut open_length = 0.0;

        for pair in pure.windows(2) {
            let (leg, cost) = expand_leg(graph, anchor, pair[0], pair[1])?;
            nodes.extend_from_slice(&leg[1..]);
            open_length += cost;
        }

        let drift = (open_length - route.length()).abs();
        if drift > LENGTH_TOLERANCE * open_length.abs().max(1.0) {
            return Err(RealizeError::LengthDrift {
                anchor,
                tracked: route.length(),
                recomputed: open_length,
            });
        }

        let mut total = open_length;
        if route.target_count() > 0 {
            let (leg, cost) = expand_leg(graph, anchor, route.last(), anchor)?;
            nodes.extend_from_slice(&leg[1..]);
            total += cost;
        }

        realized.insert(
            anchor,
            RealizedRoute {
                nodes,
                length: total,
            },
        );
    }

    Ok(realized)
}
