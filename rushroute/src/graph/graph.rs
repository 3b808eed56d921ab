use std::fmt::Debug;
use std::hash::Hash;

/// Requirements for a node identifier
///
/// `Ord` is required to break ties between equally expensive queue entries, so that a search is
/// reproducible run after run.
pub trait Identifier: Eq + Ord + Hash + Copy + Debug {}
impl<T> Identifier for T where T: Eq + Ord + Hash + Copy + Debug {}

/// Defines type of the identifier for the graph
pub trait GraphBase {
  type NodeId: Identifier;
}

impl<'a, G: GraphBase> GraphBase for &'a G {
  type NodeId = G::NodeId;
}

impl<G: GraphBase, T> GraphBase for (G, T) {
  type NodeId = G::NodeId;
}
