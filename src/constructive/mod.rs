//! Constructive heuristic for the initial route partition.
//!
//! - [`build_initial_solution`] — greedy shortest-route-first growth,
//!   one Dijkstra run per covered target

mod greedy;

pub use greedy::{build_initial_solution, CoverError};
