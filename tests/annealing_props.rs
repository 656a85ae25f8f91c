//! Property tests for the optimizer and its bookkeeping.

use proptest::prelude::*;

use route_cover::annealing::{optimize, AnnealConfig};
use route_cover::constructive::build_initial_solution;
use route_cover::graph::TransitGraph;
use route_cover::models::{NodeId, NodeKind, Solution};
use route_cover::realize::realize;
use route_cover::shortest_path::{distance, path_cost};

fn id(n: u64) -> NodeId {
    NodeId::new(n)
}

/// A bidirectional ring of `n` nodes with unit edges; nodes whose index
/// is in `targets` are tagged targets, the rest transit.
fn ring_graph(n: u64, targets: &[u64]) -> TransitGraph {
    let mut g = TransitGraph::new();
    for i in 0..n {
        let kind = if targets.contains(&i) {
            NodeKind::Target
        } else {
            NodeKind::Transit
        };
        g.add_node(id(i), kind);
    }
    for i in 0..n {
        g.add_edge_bidirectional(id(i), id((i + 1) % n), 1.0);
    }
    g
}

/// Ring size, target indices, anchor indices (distinct), and a seed.
fn ring_instance() -> impl Strategy<Value = (u64, Vec<u64>, Vec<u64>, u64)> {
    (6u64..14).prop_flat_map(|n| {
        let targets = proptest::collection::btree_set(0..n, 2..=(n as usize - 2))
            .prop_map(|s| s.into_iter().collect::<Vec<u64>>());
        let anchors = proptest::collection::btree_set(0..n, 1..=2)
            .prop_map(|s| s.into_iter().collect::<Vec<u64>>());
        (Just(n), targets, anchors, any::<u64>())
    })
}

fn anneal(
    graph: &TransitGraph,
    initial: Solution,
    seed: u64,
) -> (Solution, route_cover::annealing::AnnealStats) {
    let config = AnnealConfig::default()
        .with_iterations(600)
        .with_initial_temperature(2.0)
        .with_seed(seed);
    optimize(graph, initial, &config).unwrap()
}

proptest! {
    /// On a ring every target is reachable, so coverage is always full
    /// and every target lands in exactly one route — before and after
    /// optimization.
    #[test]
    fn optimizer_preserves_target_partition(
        (n, targets, anchors, seed) in ring_instance()
    ) {
        let g = ring_graph(n, &targets);
        let anchor_ids: Vec<NodeId> = anchors.iter().map(|&a| id(a)).collect();
        let (initial, status) = build_initial_solution(&g, &anchor_ids).unwrap();
        prop_assert!(status.is_full());

        let (optimized, _) = anneal(&g, initial, seed);

        let mut covered: Vec<NodeId> = optimized
            .routes()
            .flat_map(|r| r.nodes().iter().copied().filter(|&x| g.is_target(x)))
            .collect();
        covered.sort_unstable();
        let mut expected: Vec<NodeId> = g.targets();
        expected.sort_unstable();
        prop_assert_eq!(covered, expected);
    }

    /// The incrementally tracked route lengths stay equal to the
    /// recomputed sum of pairwise shortest-path distances.
    #[test]
    fn tracked_lengths_match_recomputation(
        (n, targets, anchors, seed) in ring_instance()
    ) {
        let g = ring_graph(n, &targets);
        let anchor_ids: Vec<NodeId> = anchors.iter().map(|&a| id(a)).collect();
        let (initial, _) = build_initial_solution(&g, &anchor_ids).unwrap();
        let (optimized, _) = anneal(&g, initial, seed);

        for route in optimized.routes() {
            let truth = path_cost(&g, route.nodes());
            prop_assert!(
                (route.length() - truth).abs() < 1e-6,
                "tracked {} vs recomputed {}",
                route.length(),
                truth
            );
        }
    }

    /// A fixed seed makes the whole optimization reproducible.
    #[test]
    fn optimizer_is_deterministic_per_seed(
        (n, targets, anchors, seed) in ring_instance()
    ) {
        let g = ring_graph(n, &targets);
        let anchor_ids: Vec<NodeId> = anchors.iter().map(|&a| id(a)).collect();
        let (initial, _) = build_initial_solution(&g, &anchor_ids).unwrap();

        let (a, stats_a) = anneal(&g, initial.clone(), seed);
        let (b, stats_b) = anneal(&g, initial, seed);
        prop_assert_eq!(a, b);
        prop_assert_eq!(stats_a, stats_b);
    }

    /// Best-tracking means the returned maximum route length is never
    /// worse than the greedy starting point.
    #[test]
    fn optimizer_never_worsens_max_length(
        (n, targets, anchors, seed) in ring_instance()
    ) {
        let g = ring_graph(n, &targets);
        let anchor_ids: Vec<NodeId> = anchors.iter().map(|&a| id(a)).collect();
        let (initial, _) = build_initial_solution(&g, &anchor_ids).unwrap();
        let before = initial.max_length();

        let (optimized, _) = anneal(&g, initial, seed);
        prop_assert!(optimized.max_length() <= before + 1e-9);
    }

    /// Optimized solutions always realize: every leg has a path and the
    /// tracked lengths survive the drift check.
    #[test]
    fn optimized_solutions_realize(
        (n, targets, anchors, seed) in ring_instance()
    ) {
        let g = ring_graph(n, &targets);
        let anchor_ids: Vec<NodeId> = anchors.iter().map(|&a| id(a)).collect();
        let (initial, _) = build_initial_solution(&g, &anchor_ids).unwrap();
        let (optimized, _) = anneal(&g, initial, seed);

        let realized = realize(&g, &optimized).unwrap();
        prop_assert_eq!(realized.len(), anchor_ids.len());
        for (&anchor, r) in &realized {
            let tracked = optimized.route(anchor).unwrap().length();
            // The closing leg only ever adds length.
            prop_assert!(r.length() >= tracked - 1e-9);
        }
    }

    /// Ring distances have a closed form: the shorter way around.
    #[test]
    fn ring_distance_closed_form(n in 4u64..16, a in 0u64..16, b in 0u64..16) {
        let a = a % n;
        let b = b % n;
        let g = ring_graph(n, &[]);
        let gap = a.abs_diff(b);
        let expected = gap.min(n - gap) as f64;
        prop_assert!((distance(&g, id(a), id(b)) - expected).abs() < 1e-9);
    }
}
