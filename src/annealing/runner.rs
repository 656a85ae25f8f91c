//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{AnnealConfig, ConfigError};
use super::moves::{try_relocation, try_segment_reversal, MoveOutcome};
use crate::graph::TransitGraph;
use crate::models::{NodeId, Solution};
use crate::shortest_path::DistanceCache;

/// Counters from one annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealStats {
    /// Total move attempts (equals the configured budget).
    pub iterations: usize,
    /// Moves that passed the acceptance test and were applied.
    pub accepted: usize,
    /// Accepted moves with a strictly negative delta.
    pub improving: usize,
    /// Iterations consumed by degenerate (unformable) moves.
    pub skipped: usize,
    /// Temperature when the budget ran out.
    pub final_temperature: f64,
}

/// Runs simulated annealing over a solution's pure routes.
///
/// Each iteration attempts exactly one move: a segment reversal with
/// probability `reversal_probability`, otherwise a relocation out of the
/// longest route. Worsening moves are Metropolis-accepted; the
/// temperature cools geometrically every `cooling_interval` iterations.
/// Target coverage is preserved exactly: moves reorder and reassign
/// targets but never drop or duplicate them.
///
/// Returns the best solution seen (by maximum route length) together
/// with run statistics, so the result is never worse than the input. A
/// given `config.seed` makes the run exactly reproducible.
///
/// # Examples
///
/// ```
/// use route_cover::annealing::{optimize, AnnealConfig};
/// use route_cover::constructive::build_initial_solution;
/// use route_cover::graph::TransitGraph;
/// use route_cover::models::{NodeId, NodeKind};
///
/// let mut g = TransitGraph::new();
/// for n in 0..4 {
///     g.add_node(NodeId::new(n), NodeKind::Target);
/// }
/// for n in 0..3 {
///     g.add_edge_bidirectional(NodeId::new(n), NodeId::new(n + 1), 1.0);
/// }
/// let (initial, _) = build_initial_solution(&g, &[NodeId::new(0)]).unwrap();
/// let before = initial.max_length();
///
/// let config = AnnealConfig::default().with_iterations(500).with_seed(42);
/// let (optimized, stats) = optimize(&g, initial, &config).unwrap();
/// assert!(optimized.max_length() <= before + 1e-9);
/// assert_eq!(stats.iterations, 500);
/// ```
pub fn optimize(
    graph: &TransitGraph,
    solution: Solution,
    config: &AnnealConfig,
) -> Result<(Solution, AnnealStats), ConfigError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut cache = DistanceCache::new(graph);
    let anchors: Vec<NodeId> = solution.anchors().collect();

    let mut current = solution;
    let mut best = current.clone();
    let mut best_max = current.max_length();

    let mut temperature = config.initial_temperature;
    let mut accepted = 0usize;
    let mut improving = 0usize;
    let mut skipped = 0usize;

    for iteration in 0..config.iterations {
        let outcome = if rng.random_range(0.0..1.0) < config.reversal_probability {
            try_segment_reversal(&mut current, &anchors, &mut cache, temperature, &mut rng)
        } else {
            try_relocation(
                &mut current,
                &anchors,
                &mut cache,
                temperature,
                config.cross_route_probability,
                &mut rng,
            )
        };

        match outcome {
            MoveOutcome::Applied { improving: better } => {
                accepted += 1;
                if better {
                    improving += 1;
                }
                trace!(iteration, improving = better, "move applied");
                let max = current.max_length();
                if max < best_max {
                    best_max = max;
                    best = current.clone();
                }
            }
            MoveOutcome::Rejected => {}
            MoveOutcome::Degenerate => skipped += 1,
        }

        if (iteration + 1) % config.cooling_interval == 0 {
            temperature *= config.cooling_factor;
        }
    }

    debug!(
        iterations = config.iterations,
        accepted,
        improving,
        skipped,
        final_temperature = temperature,
        best_max,
        "annealing finished"
    );

    Ok((
        best,
        AnnealStats {
            iterations: config.iterations,
            accepted,
            improving,
            skipped,
            final_temperature: temperature,
        },
    ))
}
