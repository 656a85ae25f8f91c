//! Neighborhood moves over pure routes.
//!
//! Both moves compute their length delta from oracle distances before
//! touching the route, apply it only on acceptance, and keep every
//! route's tracked length consistent with its node sequence.

use rand::Rng;

use crate::models::{NodeId, Solution};
use crate::shortest_path::DistanceCache;

/// What a single move attempt did to the solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MoveOutcome {
    /// The move passed the acceptance test and was applied.
    Applied {
        /// `true` when the total delta was strictly negative.
        improving: bool,
    },
    /// The move was evaluated and turned down.
    Rejected,
    /// The move could not be formed (route too short, no candidates).
    /// Consumes the iteration without mutating anything.
    Degenerate,
}

/// Metropolis acceptance: improving moves always, worsening moves with
/// probability `exp(-delta / temperature)`.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / temperature).exp()
}

/// Length change from removing the element at `i` (never the anchor).
///
/// Both incident legs disappear; when an interior element is removed a
/// single bridging leg replaces them, while removing the final element
/// adds nothing back.
fn removal_delta(nodes: &[NodeId], i: usize, cache: &mut DistanceCache<'_>) -> f64 {
    debug_assert!(i > 0 && i < nodes.len());
    if i == nodes.len() - 1 {
        -cache.get(nodes[i - 1], nodes[i])
    } else {
        cache.get(nodes[i - 1], nodes[i + 1])
            - cache.get(nodes[i - 1], nodes[i])
            - cache.get(nodes[i], nodes[i + 1])
    }
}

/// Length change from inserting `node` at `j` (never before the anchor).
///
/// Inserting at the end adds one leg; inserting in the interior splits
/// an existing leg in two.
fn insertion_delta(
    nodes: &[NodeId],
    j: usize,
    node: NodeId,
    cache: &mut DistanceCache<'_>,
) -> f64 {
    debug_assert!(j > 0 && j <= nodes.len());
    if j == nodes.len() {
        cache.get(nodes[j - 1], node)
    } else {
        cache.get(nodes[j - 1], node) + cache.get(node, nodes[j])
            - cache.get(nodes[j - 1], nodes[j])
    }
}

/// Attempts a segment reversal on a uniformly chosen route.
///
/// Requires a route with at least four elements so that a proper interior
/// span `0 < l < r < len - 1` exists; the anchor and the final element
/// never enter the reversed span. Delta:
///
/// ```text
/// delta = d(v[l-1], v[r]) + d(v[l], v[r+1])
///       - d(v[l-1], v[l]) - d(v[r], v[r+1])
/// ```
pub(crate) fn try_segment_reversal<R: Rng>(
    solution: &mut Solution,
    anchors: &[NodeId],
    cache: &mut DistanceCache<'_>,
    temperature: f64,
    rng: &mut R,
) -> MoveOutcome {
    let candidates: Vec<NodeId> = anchors
        .iter()
        .copied()
        .filter(|&a| solution.route(a).is_some_and(|r| r.len() >= 4))
        .collect();
    if candidates.is_empty() {
        return MoveOutcome::Degenerate;
    }
    let anchor = candidates[rng.random_range(0..candidates.len())];
    let route = solution.route(anchor).expect("candidate anchor has a route");
    let n = route.len();
    let l = rng.random_range(1..=n - 3);
    let r = rng.random_range(l + 1..=n - 2);

    let nodes = route.nodes();
    let (before, first, last, after) = (nodes[l - 1], nodes[l], nodes[r], nodes[r + 1]);
    let delta = cache.get(before, last) + cache.get(first, after)
        - cache.get(before, first)
        - cache.get(last, after);

    if metropolis(delta, temperature, rng) {
        solution
            .route_mut(anchor)
            .expect("candidate anchor has a route")
            .reverse_segment(l, r, delta);
        MoveOutcome::Applied {
            improving: delta < 0.0,
        }
    } else {
        MoveOutcome::Rejected
    }
}

/// Attempts to relocate one node out of the longest route.
///
/// The source is always the route with the maximum tracked length. The
/// destination is a uniformly random route with probability
/// `cross_route_probability`, otherwise the source itself (intra-route
/// repositioning). When source and destination coincide, the insertion
/// delta is computed on the route *after* removal so the two deltas never
/// double-count a leg.
pub(crate) fn try_relocation<R: Rng>(
    solution: &mut Solution,
    anchors: &[NodeId],
    cache: &mut DistanceCache<'_>,
    temperature: f64,
    cross_route_probability: f64,
    rng: &mut R,
) -> MoveOutcome {
    let src = solution
        .longest_route_anchor()
        .expect("solution has at least one route");
    let dst = if rng.random_range(0.0..1.0) < cross_route_probability {
        anchors[rng.random_range(0..anchors.len())]
    } else {
        src
    };

    let n_src = solution.route(src).expect("source route exists").len();
    if n_src < 2 {
        return MoveOutcome::Degenerate;
    }
    let i = rng.random_range(1..n_src);

    if src == dst {
        let removal = removal_delta(solution.route(src).expect("source route exists").nodes(), i, cache);
        let node = solution
            .route_mut(src)
            .expect("source route exists")
            .remove_at(i, removal);

        let m = solution.route(src).expect("source route exists").len();
        let j = rng.random_range(1..=m);
        let insertion =
            insertion_delta(solution.route(src).expect("source route exists").nodes(), j, node, cache);

        if metropolis(removal + insertion, temperature, rng) {
            solution
                .route_mut(src)
                .expect("source route exists")
                .insert_at(j, node, insertion);
            MoveOutcome::Applied {
                improving: removal + insertion < 0.0,
            }
        } else {
            // Undo the tentative removal.
            solution
                .route_mut(src)
                .expect("source route exists")
                .insert_at(i, node, -removal);
            MoveOutcome::Rejected
        }
    } else {
        let src_nodes = solution.route(src).expect("source route exists").nodes();
        let node = src_nodes[i];
        let removal = removal_delta(src_nodes, i, cache);

        let dst_route = solution.route(dst).expect("destination route exists");
        let m = dst_route.len();
        let j = rng.random_range(1..=m);
        let insertion = insertion_delta(dst_route.nodes(), j, node, cache);

        if metropolis(removal + insertion, temperature, rng) {
            solution
                .route_mut(src)
                .expect("source route exists")
                .remove_at(i, removal);
            solution
                .route_mut(dst)
                .expect("destination route exists")
                .insert_at(j, node, insertion);
            MoveOutcome::Applied {
                improving: removal + insertion < 0.0,
            }
        } else {
            MoveOutcome::Rejected
        }
    }
}
