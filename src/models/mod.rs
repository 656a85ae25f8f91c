//! Domain model types for the path-cover engine.
//!
//! Provides the core abstractions: opaque node identifiers with kind tags,
//! pure routes (anchor plus assigned targets, transit nodes abstracted
//! away), and the solution that partitions the target set across anchors.

mod node;
mod route;
mod solution;

pub use node::{NodeId, NodeKind};
pub use route::PureRoute;
pub use solution::{CoverageStatus, Solution};
