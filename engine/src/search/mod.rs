//! Path Search Module
//!
//! Graph search over roadmaps of 3D positions.
//!
//! # Submodules
//!
//! - [`graph`] - The roadmap: node positions plus undirected adjacency
//! - [`util`] - Path cost helpers shared by the searches
//! - [`astar`] - A* search ordered by g(x) + h(x)
//! - [`ucs`] - Uniform-cost search ordered by g(x) alone
//!
//! Nodes are indices into the roadmap rather than raw positions, since
//! floating-point positions make poor hash keys. The goal is always passed
//! explicitly into the search — no search state lives outside the call.

pub mod astar;
pub mod graph;
pub mod ucs;
pub mod util;

use thiserror::Error;

pub use astar::astar;
pub use graph::{NodeId, Roadmap};
pub use ucs::uniform_cost;

/// Errors raised by the search entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or goal is not a node of the roadmap.
    #[error("node {0} is not in the roadmap")]
    NodeOutOfRange(NodeId),

    /// The frontier was exhausted without reaching the goal.
    #[error("no path between start and goal")]
    NoPath,
}
