use crate::graph::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Copy, Clone, Debug)]
pub struct State<N: Identifier> {
  pub cost: Cost,
  pub id: N,
}

impl<N: Identifier> Ord for State<N> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc, ties resolved with the node id
    other
      .cost
      .total_cmp(&self.cost)
      .then_with(|| other.id.cmp(&self.id))
  }
}

// `PartialOrd` needs to be implemented as well.
impl<N: Identifier> PartialOrd for State<N> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<N: Identifier> PartialEq for State<N> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<N: Identifier> Eq for State<N> {}

/// Best known cost of a node and the node it was reached from.
#[derive(Copy, Clone, Debug)]
struct Label<N> {
  cost: Cost,
  parent: N,
}

/// Search space of a label-setting (Dijkstra) search.
///
/// The queue has no decrease-key: an improved node is pushed again and the outdated entry is
/// recognized as stale when it's popped. Nodes without a label have an infinite cost.
pub struct SearchSpace<N: Identifier> {
  pq: BinaryHeap<State<N>>,
  resolved: HashMap<N, Label<N>>,
}

impl<N: Identifier> SearchSpace<N> {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      resolved: HashMap::new(),
    }
  }

  pub fn init(&mut self, node: N) {
    self.resolve(node, node, 0.0);
  }

  pub fn cost(&self, node: N) -> Option<Cost> {
    self.resolved.get(&node).map(|label| label.cost)
  }

  pub fn num_resolved(&self) -> usize {
    self.resolved.len()
  }

  /// Removes the cheapest entry from the queue
  pub fn pop(&mut self) -> Option<State<N>> {
    self.pq.pop()
  }

  /// An entry is stale when a cheaper path to its node was found after it had been queued
  pub fn is_stale(&self, state: &State<N>) -> bool {
    self
      .cost(state.id)
      .map_or(false, |best| state.cost > best)
  }

  /// Relaxes all outgoing edges of `node` reached at `cost`.
  pub fn relax<G>(&mut self, graph: G, node: N, cost: Cost)
  where
    G: IntoWeightedNeighbors<NodeId = N>,
  {
    for (target_id, weight) in graph.weighted_neighbors(node) {
      let path_cost = cost + weight;
      if let Some(best) = self.cost(target_id) {
        if path_cost >= best {
          continue;
        }
      }
      self.resolve(target_id, node, path_cost);
    }
  }

  /// Walks parent links from `node` back to the search origin. The result starts with `node`.
  pub fn unwind(&self, node: N) -> Vec<N> {
    let mut result: Vec<N> = Vec::new();

    let mut current_node = node;
    while let Some(label) = self.resolved.get(&current_node) {
      result.push(current_node);
      if current_node == label.parent {
        break;
      }
      current_node = label.parent;
    }
    result
  }

  fn resolve(&mut self, node: N, parent: N, cost: Cost) {
    self.resolved.insert(node, Label { cost, parent });
    self.pq.push(State { cost, id: node });
  }
}
