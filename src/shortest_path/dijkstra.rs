//! Dijkstra search over a [`TransitGraph`].
//!
//! # Algorithm
//!
//! Standard binary-heap Dijkstra following edge directions. Two query
//! shapes share the core loop: point-to-point (stop when the goal pops)
//! and nearest-unvisited-target (stop at the first popped node that is a
//! target outside the visited set).
//!
//! # Determinism
//!
//! Equal-distance frontier entries pop in ascending [`NodeId`] order, so
//! every query is reproducible for a given graph. This tie-break is part
//! of the contract, not an incidental iteration order.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::TransitGraph;
use crate::models::NodeId;

/// Conventional distance for a pair with no connecting path.
///
/// A large finite constant rather than `f64::INFINITY`, so that delta
/// arithmetic over route lengths stays total (no `inf - inf`). Any route
/// length that reaches this magnitude is invalid; see [`is_unreachable`].
pub const UNREACHABLE: f64 = 1e15;

/// Returns `true` if a distance value denotes an unreachable pair.
pub fn is_unreachable(distance: f64) -> bool {
    distance >= UNREACHABLE
}

/// Min-heap entry ordered by distance, then ascending node id.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    dist: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the smallest distance;
        // ties pop the lowest node id first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Predecessor map and stop-node outcome of a single Dijkstra run.
struct Search {
    prev: HashMap<NodeId, NodeId>,
    hit: Option<(NodeId, f64)>,
}

/// Runs Dijkstra from `start`, stopping at the first popped node for
/// which `stop` returns `true`.
fn search(graph: &TransitGraph, start: NodeId, stop: impl Fn(NodeId) -> bool) -> Search {
    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(Frontier {
        dist: 0.0,
        node: start,
    });

    while let Some(Frontier { dist: d, node }) = heap.pop() {
        if d > dist[&node] {
            continue; // stale entry
        }
        if stop(node) {
            return Search {
                prev,
                hit: Some((node, d)),
            };
        }
        for (next, length) in graph.neighbors(node) {
            let candidate = d + length;
            if dist.get(&next).is_none_or(|&known| candidate < known) {
                dist.insert(next, candidate);
                prev.insert(next, node);
                heap.push(Frontier {
                    dist: candidate,
                    node: next,
                });
            }
        }
    }

    Search { prev, hit: None }
}

/// Walks the predecessor map back from `end` to `start`.
fn rebuild_path(prev: &HashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut node = end;
    while node != start {
        node = prev[&node];
        path.push(node);
    }
    path.reverse();
    path
}

/// Shortest-path length from `a` to `b` following edge directions.
///
/// Returns [`UNREACHABLE`] when no path exists, so callers can keep doing
/// arithmetic over the result; they must treat such values as invalid
/// rather than as real lengths.
///
/// # Examples
///
/// ```
/// use route_cover::graph::TransitGraph;
/// use route_cover::models::{NodeId, NodeKind};
/// use route_cover::shortest_path::{distance, is_unreachable};
///
/// let mut g = TransitGraph::new();
/// let (a, b) = (NodeId::new(0), NodeId::new(1));
/// g.add_node(a, NodeKind::Transit);
/// g.add_node(b, NodeKind::Target);
/// g.add_edge(a, b, 4.0);
/// assert!((distance(&g, a, b) - 4.0).abs() < 1e-10);
/// assert!(is_unreachable(distance(&g, b, a)));
/// ```
pub fn distance(graph: &TransitGraph, a: NodeId, b: NodeId) -> f64 {
    if a == b {
        return 0.0;
    }
    match search(graph, a, |node| node == b).hit {
        Some((_, d)) => d,
        None => UNREACHABLE,
    }
}

/// One concrete shortest path from `a` to `b`, endpoints included.
///
/// Returns `None` when no path exists. When several shortest paths tie,
/// the one determined by the documented pop order is returned.
pub fn shortest_path(graph: &TransitGraph, a: NodeId, b: NodeId) -> Option<Vec<NodeId>> {
    if a == b {
        return graph.contains(a).then(|| vec![a]);
    }
    let result = search(graph, a, |node| node == b);
    result
        .hit
        .map(|_| rebuild_path(&result.prev, a, b))
}

/// Finds the closest target to `start` that is not in `visited`.
///
/// Runs Dijkstra from `start` and terminates as soon as it pops a node
/// tagged target and absent from `visited`, returning the node, its
/// distance, and the reconstructed path from `start` (endpoints
/// included). Returns `None` if the frontier empties first, meaning every
/// reachable target is already visited.
pub fn nearest_unvisited_target(
    graph: &TransitGraph,
    start: NodeId,
    visited: &HashSet<NodeId>,
) -> Option<(NodeId, f64, Vec<NodeId>)> {
    let result = search(graph, start, |node| {
        graph.is_target(node) && !visited.contains(&node)
    });
    result.hit.map(|(node, d)| {
        let path = rebuild_path(&result.prev, start, node);
        (node, d, path)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    fn id(n: u64) -> NodeId {
        NodeId::new(n)
    }

    /// 0 -1.0- 1 -1.0- 2, with a 3.0 shortcut 0 -> 2 and target at 2.
    fn line_graph() -> TransitGraph {
        let mut g = TransitGraph::new();
        g.add_node(id(0), NodeKind::Transit);
        g.add_node(id(1), NodeKind::Transit);
        g.add_node(id(2), NodeKind::Target);
        g.add_edge_bidirectional(id(0), id(1), 1.0);
        g.add_edge_bidirectional(id(1), id(2), 1.0);
        g.add_edge(id(0), id(2), 3.0);
        g
    }

    #[test]
    fn test_distance_prefers_cheaper_detour() {
        let g = line_graph();
        assert!((distance(&g, id(0), id(2)) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_same_node_zero() {
        let g = line_graph();
        assert_eq!(distance(&g, id(1), id(1)), 0.0);
    }

    #[test]
    fn test_distance_respects_direction() {
        let mut g = TransitGraph::new();
        g.add_node(id(0), NodeKind::Transit);
        g.add_node(id(1), NodeKind::Transit);
        g.add_edge(id(0), id(1), 1.0);
        assert!((distance(&g, id(0), id(1)) - 1.0).abs() < 1e-10);
        assert!(is_unreachable(distance(&g, id(1), id(0))));
    }

    #[test]
    fn test_shortest_path_nodes() {
        let g = line_graph();
        assert_eq!(
            shortest_path(&g, id(0), id(2)),
            Some(vec![id(0), id(1), id(2)])
        );
        assert_eq!(shortest_path(&g, id(1), id(1)), Some(vec![id(1)]));
    }

    #[test]
    fn test_shortest_path_unreachable() {
        let mut g = line_graph();
        g.add_node(id(9), NodeKind::Target);
        assert_eq!(shortest_path(&g, id(0), id(9)), None);
    }

    #[test]
    fn test_nearest_target_basic() {
        let g = line_graph();
        let visited = HashSet::new();
        let (node, d, path) = nearest_unvisited_target(&g, id(0), &visited).unwrap();
        assert_eq!(node, id(2));
        assert!((d - 2.0).abs() < 1e-10);
        assert_eq!(path, vec![id(0), id(1), id(2)]);
    }

    #[test]
    fn test_nearest_target_skips_visited() {
        let g = line_graph();
        let visited: HashSet<NodeId> = [id(2)].into_iter().collect();
        assert!(nearest_unvisited_target(&g, id(0), &visited).is_none());
    }

    #[test]
    fn test_nearest_target_start_counts() {
        let g = line_graph();
        let visited = HashSet::new();
        let (node, d, path) = nearest_unvisited_target(&g, id(2), &visited).unwrap();
        assert_eq!(node, id(2));
        assert_eq!(d, 0.0);
        assert_eq!(path, vec![id(2)]);
    }

    #[test]
    fn test_equal_distance_tie_breaks_low_id() {
        // Two targets at identical distance from the start.
        let mut g = TransitGraph::new();
        g.add_node(id(0), NodeKind::Transit);
        g.add_node(id(5), NodeKind::Target);
        g.add_node(id(7), NodeKind::Target);
        g.add_edge(id(0), id(7), 1.0);
        g.add_edge(id(0), id(5), 1.0);
        let (node, _, _) = nearest_unvisited_target(&g, id(0), &HashSet::new()).unwrap();
        assert_eq!(node, id(5));
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let mut g = TransitGraph::new();
        g.add_node(id(0), NodeKind::Transit);
        g.add_node(id(1), NodeKind::Target);
        g.add_edge(id(0), id(1), 5.0);
        g.add_edge(id(0), id(1), 2.0);
        assert!((distance(&g, id(0), id(1)) - 2.0).abs() < 1e-10);
    }
}
