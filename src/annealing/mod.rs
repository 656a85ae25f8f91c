//! Simulated-annealing optimizer over pure routes.
//!
//! A single-solution trajectory search: each iteration perturbs the route
//! partition with one of two neighborhood moves (segment reversal, node
//! relocation out of the longest route), accepts by the Metropolis rule,
//! and cools geometrically. Only route lengths are delta-updated; the
//! graph is consulted through memoized distance queries.

mod config;
mod moves;
mod runner;

pub use config::{AnnealConfig, ConfigError};
pub use runner::{optimize, AnnealStats};
