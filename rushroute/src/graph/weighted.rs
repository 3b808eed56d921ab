use crate::graph::GraphBase;

/// Cost of traversing an edge. Depending on the cost model it is either meters or seconds.
pub type Cost = f64;

/// Weighted graph
///
/// Unlike a node-to-node transition weight, the cost is attached to each outgoing edge, so
/// parallel edges between the same pair of nodes keep their own costs.
pub trait IntoWeightedNeighbors: GraphBase {
  type Neighbors: Iterator<Item = (Self::NodeId, Cost)>;
  fn weighted_neighbors(self, node: Self::NodeId) -> Self::Neighbors;
}
