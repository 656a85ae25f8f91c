//! # route-cover
//!
//! Min-max multi-depot path cover over weighted transit graphs.
//!
//! Given a directed multigraph whose nodes are tagged transit or target,
//! and one anchor node per desired route, the engine produces one route
//! per anchor that together visit every target exactly once, balancing
//! the maximum route length: greedy construction, then simulated
//! annealing over the abstract route partition, then realization into
//! explicit node-level paths.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (NodeId, NodeKind, PureRoute, Solution, CoverageStatus)
//! - [`graph`] — Weighted directed multigraph container
//! - [`shortest_path`] — Dijkstra oracle (distance, paths, nearest-target queries)
//! - [`constructive`] — Greedy initial route partition
//! - [`annealing`] — Simulated-annealing local search over pure routes
//! - [`realize`] — Expansion of pure routes into traversable paths
//!
//! ## Pipeline
//!
//! ```
//! use route_cover::annealing::{optimize, AnnealConfig};
//! use route_cover::constructive::build_initial_solution;
//! use route_cover::graph::TransitGraph;
//! use route_cover::models::{NodeId, NodeKind};
//! use route_cover::realize::realize;
//!
//! // Square of transit nodes with one target hanging off each far corner.
//! let mut g = TransitGraph::new();
//! for n in 0..4 {
//!     g.add_node(NodeId::new(n), NodeKind::Transit);
//! }
//! for n in 0..4 {
//!     g.add_edge_bidirectional(NodeId::new(n), NodeId::new((n + 1) % 4), 1.0);
//! }
//! for t in [4, 5] {
//!     g.add_node(NodeId::new(t), NodeKind::Target);
//!     g.add_edge_bidirectional(NodeId::new(t - 3), NodeId::new(t), 0.5);
//! }
//!
//! let anchor = NodeId::new(0);
//! let (initial, status) = build_initial_solution(&g, &[anchor]).unwrap();
//! assert!(status.is_full());
//!
//! let config = AnnealConfig::default().with_iterations(1_000).with_seed(7);
//! let (solution, _stats) = optimize(&g, initial, &config).unwrap();
//!
//! let realized = realize(&g, &solution).unwrap();
//! assert_eq!(realized[&anchor].anchor(), anchor);
//! ```

pub mod annealing;
pub mod constructive;
pub mod graph;
pub mod models;
pub mod realize;
pub mod shortest_path;
