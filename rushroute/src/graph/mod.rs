//! Set of traits for defining a graph abstraction.
//!
//! The search only needs two things from a graph: a node identifier type and, for each node, the
//! outgoing neighbors together with the cost of reaching them.
//!
mod graph;
mod weighted;

pub use graph::*;
pub use weighted::*;
